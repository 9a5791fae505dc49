//! Console notifier - prints notices to stderr.

use quillpad_core::ports::{Notice, NoticeLevel, Notifier};

pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notice: Notice) {
        let mark = match notice.level {
            NoticeLevel::Success => "✔",
            NoticeLevel::Error => "✖",
        };
        if notice.description.is_empty() {
            eprintln!("{mark} {}", notice.title);
        } else {
            eprintln!("{mark} {}: {}", notice.title, notice.description);
        }
    }
}
