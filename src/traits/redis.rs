use redis::{ErrorKind, RedisError, RedisResult, Value};
use serde::de::DeserializeOwned;

/// A record stored in redis as a JSON string.
#[derive(Debug)]
pub struct Json<T>(pub T);

impl<T> Json<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: DeserializeOwned> redis::FromRedisValue for Json<T> {
    fn from_redis_value(v: &Value) -> RedisResult<Self> {
        let raw: String = redis::from_redis_value(v)?;
        serde_json::from_str(&raw)
            .map(Json)
            .map_err(|e| RedisError::from((ErrorKind::TypeError, "invalid JSON record", e.to_string())))
    }
}
