pub mod health;
pub mod prayer_cache;
pub mod prayer_times;
pub mod subscription;
