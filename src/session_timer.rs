use dioxus::prelude::*;
#[cfg(target_arch = "wasm32")]
use gloo_timers::future::TimeoutFuture;

#[cfg(target_arch = "wasm32")]
const TICK_MS: u32 = 1000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionTimer {
    seconds: u64,
}

impl SessionTimer {
    pub fn tick(&mut self) {
        self.seconds += 1;
    }

    pub fn seconds(&self) -> u64 {
        self.seconds
    }

    pub fn label(&self) -> String {
        format!("You have been on the website for: {}", format_duration(self.seconds()))
    }
}

fn plural(count: u64, unit: &str) -> String {
    if count == 1 {
        format!("{count} {unit}")
    } else {
        format!("{count} {unit}s")
    }
}

pub fn format_duration(seconds: u64) -> String {
    if seconds <= 59 {
        return plural(seconds, "second");
    }
    let minutes = seconds / 60;
    let remainder = seconds % 60;
    format!("{} and {}", plural(minutes, "minute"), plural(remainder, "second"))
}

#[component]
pub fn SessionCounter() -> Element {
    let mut timer = use_signal(SessionTimer::default);

    use_future(move || async move {
        while wait_one_second().await {
            timer.write().tick();
        }
    });

    rsx! {
        p { id: "counter", class: "session-counter", "{timer.read().label()}" }
    }
}

/// Returns false when there is no browser clock to wait on.
#[cfg(target_arch = "wasm32")]
async fn wait_one_second() -> bool {
    TimeoutFuture::new(TICK_MS).await;
    true
}

#[cfg(not(target_arch = "wasm32"))]
async fn wait_one_second() -> bool {
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn seconds_only_below_a_minute() {
        assert_eq!(format_duration(0), "0 seconds");
        assert_eq!(format_duration(1), "1 second");
        assert_eq!(format_duration(59), "59 seconds");
    }

    #[test]
    fn minutes_and_seconds_from_sixty() {
        assert_eq!(format_duration(60), "1 minute and 0 seconds");
        assert_eq!(format_duration(61), "1 minute and 1 second");
        assert_eq!(format_duration(120), "2 minutes and 0 seconds");
        assert_eq!(format_duration(3725), "62 minutes and 5 seconds");
    }

    #[test]
    fn tick_counts_up_from_zero() {
        let mut timer = SessionTimer::default();
        assert_eq!(timer.seconds(), 0);
        for _ in 0..61 {
            timer.tick();
        }
        assert_eq!(
            timer.label(),
            "You have been on the website for: 1 minute and 1 second"
        );
    }
}
