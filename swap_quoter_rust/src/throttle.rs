use std::time::Duration;

use rand::Rng;
use tokio::time::sleep;

/// Upper bound of the random delay inserted before each upstream request.
pub const MAX_REQUEST_JITTER: Duration = Duration::from_millis(10_000);

/// Draws a delay uniformly at random from `[0, max_delay)` in whole
/// milliseconds. A zero window yields no delay.
pub fn draw_jitter<R: Rng>(rng: &mut R, max_delay: Duration) -> Duration {
    let max_millis = max_delay.as_millis() as u64;
    if max_millis == 0 {
        return Duration::ZERO;
    }

    Duration::from_millis(rng.gen_range(0..max_millis))
}

/// Suspends the current task for a random delay below `max_delay`.
///
/// Desynchronizes concurrent invocations that share the upstream rate limit;
/// advisory only, collisions stay possible. The delay always runs to
/// completion before the caller proceeds to the network call.
pub async fn jitter_sleep<R: Rng>(rng: &mut R, max_delay: Duration) {
    sleep(draw_jitter(rng, max_delay)).await;
}
