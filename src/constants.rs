// src/constants.rs
//! Names and codes shared with the server: query operators, sort
//! directions, binary subtypes and administrative commands.

/// Pseudo-collection that receives database commands.
pub const CMD_COLLECTION: &str = "$cmd";

/// Admin database.
pub const ADMIN: &str = "admin";

// Query operators
pub const LT: &str = "$lt";
pub const LTE: &str = "$lte";
pub const GT: &str = "$gt";
pub const GTE: &str = "$gte";
/// Checks for a field value in a list.
pub const IN: &str = "$in";
pub const NE: &str = "$ne";

// Sort directions
pub const ASC: i32 = 1;
pub const DESC: i32 = -1;

// Binary subtypes
/// Function as binary data.
pub const BIN_FUNCTION: u8 = 1;
/// Default binary type: an array of bytes.
pub const BIN_ARRAY: u8 = 2;
pub const BIN_UUID: u8 = 3;
pub const BIN_MD5: u8 = 5;
/// User-defined binary type.
pub const BIN_CUSTOM: u8 = 128;

// Commands
pub const AUTHENTICATE: &str = "authenticate";
pub const CREATE_COLLECTION: &str = "create";
pub const DELETE_INDICES: &str = "deleteIndexes";
pub const DROP: &str = "drop";
pub const DROP_DATABASE: &str = "dropDatabase";
pub const FORCE_ERROR: &str = "forceerror";
pub const INDEX_INFO: &str = "cursorInfo";
pub const LAST_ERROR: &str = "getlasterror";
pub const LIST_DATABASES: &str = "listDatabases";
pub const LOGGING: &str = "opLogging";
pub const LOGOUT: &str = "logout";
pub const NONCE: &str = "getnonce";
pub const PREV_ERROR: &str = "getpreverror";
pub const PROFILE: &str = "profile";
pub const QUERY_TRACING: &str = "queryTraceLevel";
pub const REPAIR_DATABASE: &str = "repairDatabase";
pub const RESET_ERROR: &str = "reseterror";
pub const SHUTDOWN: &str = "shutdown";
pub const TRACING: &str = "traceAll";
pub const VALIDATE: &str = "validate";

/// Every command name above, in declaration order.
pub const COMMANDS: [&str; 20] = [
    AUTHENTICATE,
    CREATE_COLLECTION,
    DELETE_INDICES,
    DROP,
    DROP_DATABASE,
    FORCE_ERROR,
    INDEX_INFO,
    LAST_ERROR,
    LIST_DATABASES,
    LOGGING,
    LOGOUT,
    NONCE,
    PREV_ERROR,
    PROFILE,
    QUERY_TRACING,
    REPAIR_DATABASE,
    RESET_ERROR,
    SHUTDOWN,
    TRACING,
    VALIDATE,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn value(self) -> i32 {
        match self {
            SortDirection::Ascending => ASC,
            SortDirection::Descending => DESC,
        }
    }
}

impl From<SortDirection> for bson::Bson {
    fn from(dir: SortDirection) -> Self {
        bson::Bson::Int32(dir.value())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinarySubtypeCode {
    Function,
    ByteArray,
    Uuid,
    Md5,
    Custom,
}

impl BinarySubtypeCode {
    pub fn code(self) -> u8 {
        match self {
            BinarySubtypeCode::Function => BIN_FUNCTION,
            BinarySubtypeCode::ByteArray => BIN_ARRAY,
            BinarySubtypeCode::Uuid => BIN_UUID,
            BinarySubtypeCode::Md5 => BIN_MD5,
            BinarySubtypeCode::Custom => BIN_CUSTOM,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            BIN_FUNCTION => Some(BinarySubtypeCode::Function),
            BIN_ARRAY => Some(BinarySubtypeCode::ByteArray),
            BIN_UUID => Some(BinarySubtypeCode::Uuid),
            BIN_MD5 => Some(BinarySubtypeCode::Md5),
            BIN_CUSTOM => Some(BinarySubtypeCode::Custom),
            _ => None,
        }
    }
}
