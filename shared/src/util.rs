use crate::types::Timestamp;

/// 获取当前 UTC 时间戳（毫秒）
pub fn now_millis() -> Timestamp {
    chrono::Utc::now().timestamp_millis()
}

/// Generate a short order id (`ord-` + 12 hex chars of a v4 UUID).
pub fn order_id() -> String {
    let uuid = uuid::Uuid::new_v4().simple().to_string();
    format!("ord-{}", &uuid[..12])
}
