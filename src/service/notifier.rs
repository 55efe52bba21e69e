use async_trait::async_trait;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Success,
    Error,
}

/// Where user-facing messages go: toasts for action results, banners for
/// reminders.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn toast(&self, level: ToastLevel, message: &str);
    async fn banner(&self, title: &str, message: &str);
}

pub struct ConsoleNotifier;

#[async_trait]
impl Notifier for ConsoleNotifier {
    async fn toast(&self, level: ToastLevel, message: &str) {
        match level {
            ToastLevel::Info => println!("{message}"),
            ToastLevel::Success => println!("✓ {message}"),
            ToastLevel::Error => eprintln!("✗ {message}"),
        }
    }

    async fn banner(&self, title: &str, message: &str) {
        println!("! {title}: {message}");
    }
}
