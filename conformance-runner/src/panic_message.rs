use std::any::Any;

pub fn format_panic(payload: Box<dyn Any + Send>) -> String {
    let detail = payload
        .downcast_ref::<&str>()
        .map(|msg| msg.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned());
    match detail {
        Some(msg) => format!("panic while running case: {msg}"),
        None => "panic while running case".to_string(),
    }
}
