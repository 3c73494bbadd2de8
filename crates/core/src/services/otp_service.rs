use cashout_primitives::error::ApiError;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval, Instant};
use tracing::debug;
use uuid::Uuid;

/// Live OTP challenge for one withdrawal. Created when the backend asks for
/// step-up verification, destroyed when the flow reaches a terminal state or
/// the user walks away.
#[derive(Debug, Clone)]
pub struct OtpChallenge {
    withdrawal_id: Uuid,
    attempts: u32,
    entered_code: Option<String>,
    cooldown: CooldownTimer,
}

impl OtpChallenge {
    /// The backend delivers a code the moment the challenge is issued, so the
    /// resend window starts counting immediately.
    pub fn new(withdrawal_id: Uuid, resend_window_secs: u32) -> Self {
        Self {
            withdrawal_id,
            attempts: 0,
            entered_code: None,
            cooldown: CooldownTimer::start(resend_window_secs),
        }
    }

    pub fn withdrawal_id(&self) -> Uuid {
        self.withdrawal_id
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn entered_code(&self) -> Option<&str> {
        self.entered_code.as_deref()
    }

    pub fn record_code(&mut self, code: &str) {
        self.entered_code = Some(code.to_string());
    }

    /// A rejected code is cleared and counted. The resend cooldown is not
    /// touched; a new resend is still required to reset it.
    pub fn reject_code(&mut self) {
        self.entered_code = None;
        self.attempts += 1;
    }

    pub fn remaining_cooldown(&self) -> u32 {
        self.cooldown.remaining_secs()
    }

    pub fn can_resend(&self) -> bool {
        self.cooldown.is_expired()
    }

    /// Restart the resend window and clear whatever was typed. Only callable
    /// once the previous window has fully elapsed.
    pub fn resend(&mut self) -> Result<u32, ApiError> {
        if !self.can_resend() {
            return Err(ApiError::State(format!(
                "resend available in {}s",
                self.remaining_cooldown()
            )));
        }

        self.entered_code = None;
        self.cooldown.restart();
        debug!(withdrawal_id = %self.withdrawal_id, "OTP resend window restarted");
        Ok(self.cooldown.window_secs())
    }

    pub fn start_ticker(&self) -> CooldownTicker {
        CooldownTicker::spawn(self.cooldown.clone())
    }
}

/// Countdown derived from the start instant rather than accumulated ticks:
/// the remaining value is exact for any elapsed wall-clock time, no matter
/// how often anyone looks at it.
#[derive(Debug, Clone)]
pub struct CooldownTimer {
    window_secs: u32,
    deadline: Instant,
}

impl CooldownTimer {
    pub fn start(window_secs: u32) -> Self {
        Self {
            window_secs,
            deadline: Instant::now() + Duration::from_secs(window_secs.into()),
        }
    }

    pub fn window_secs(&self) -> u32 {
        self.window_secs
    }

    pub fn remaining_secs(&self) -> u32 {
        secs_ceil(self.deadline.saturating_duration_since(Instant::now()))
    }

    pub fn is_expired(&self) -> bool {
        self.remaining_secs() == 0
    }

    pub fn restart(&mut self) {
        self.deadline = Instant::now() + Duration::from_secs(self.window_secs.into());
    }
}

/// 1 Hz countdown publisher for the OTP screen. The task stops on its own
/// once the countdown reaches zero and is aborted when the handle drops, so
/// a torn-down screen cannot leave a timer mutating anything.
#[derive(Debug)]
pub struct CooldownTicker {
    rx: watch::Receiver<u32>,
    handle: JoinHandle<()>,
}

impl CooldownTicker {
    pub fn spawn(timer: CooldownTimer) -> Self {
        let (tx, rx) = watch::channel(timer.remaining_secs());

        let handle = tokio::spawn(async move {
            let mut tick = interval(Duration::from_secs(1));
            // the first tick completes immediately
            tick.tick().await;

            loop {
                tick.tick().await;
                let remaining = timer.remaining_secs();
                if tx.send(remaining).is_err() {
                    break;
                }
                if remaining == 0 {
                    break;
                }
            }
        });

        Self { rx, handle }
    }

    pub fn remaining(&self) -> u32 {
        *self.rx.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<u32> {
        self.rx.clone()
    }

    pub fn cancel(&self) {
        self.handle.abort();
    }
}

impl Drop for CooldownTicker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn secs_ceil(d: Duration) -> u32 {
    let mut secs = d.as_secs() as u32;
    if d.subsec_nanos() > 0 {
        secs += 1;
    }
    secs
}
