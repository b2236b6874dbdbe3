use std::time::{Duration, Instant};

/// 保留中のフィルタ適用
#[derive(Debug, Clone)]
struct Pending {
    pattern: String,
    deadline: Instant,
}

/// フィルタ適用の遅延タイマー（パーティションごとに一つ）
///
/// 新しい入力は保留中の適用を置き換える。キューには積まない。
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<Pending>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// `now + delay` に適用を予約（既存の予約は破棄）
    pub fn schedule(&mut self, pattern: impl Into<String>, now: Instant) {
        self.pending = Some(Pending {
            pattern: pattern.into(),
            deadline: now + self.delay,
        });
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    /// 期限に達していれば予約を取り出す
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        let due = self.pending.as_ref().is_some_and(|p| p.deadline <= now);
        if due {
            self.pending.take().map(|p| p.pattern)
        } else {
            None
        }
    }
}
