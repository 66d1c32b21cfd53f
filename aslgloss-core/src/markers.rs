//! Literal gloss markers emitted by the grammar transformer

/// Follows a root that was pluralized
pub const MANY: &str = "MANY";

/// Follows a root in completed (past) aspect
pub const FINISH: &str = "FINISH";

/// Trailing non-manual marker of a yes/no question
pub const YES_NO_QUESTION: &str = "Q";

/// Trailing negation marker
pub const NEGATION: &str = "NOT";

/// Appended to the fronted topic
pub const TOPIC_SUFFIX: &str = "-t";

/// Joins subject and object in a directional verb annotation
pub const DIRECTION_JOINER: &str = "-to-";

/// Separates a verb from its annotation
pub const ANNOTATION_SEPARATOR: char = ':';
