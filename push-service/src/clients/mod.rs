pub mod fcm;
pub mod rbmq;
pub mod template;
pub mod users;
