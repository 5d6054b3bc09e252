use bson::oid::ObjectId;
use time::OffsetDateTime;

///
/// Source of identifiers for newly registered tokens
///
#[cfg_attr(test, mockall::automock)]
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

///
/// Source of creation timestamps (unix milliseconds)
///
#[cfg_attr(test, mockall::automock)]
pub trait Clock: Send + Sync {
    fn now_millis(&self) -> i64;
}

pub struct ObjectIdGenerator;

impl IdGenerator for ObjectIdGenerator {
    fn next_id(&self) -> String {
        ObjectId::new().to_hex()
    }
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64
    }
}
