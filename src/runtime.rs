use embassy_futures::select::{select, Either};
use embassy_sync::{blocking_mutex::raw::RawMutex, signal::Signal};
use embassy_time::{Duration, Instant, Ticker};
use embedded_hal::delay::DelayNs;

use crate::config::TOUCH_TICK_MS;
use crate::dispatch::{TouchContext, TouchCounters, TouchDispatcher};
use crate::history::HistoryLog;
use crate::raster::Raster;
use crate::sync::Replication;
use crate::touch::TouchSensor;
use crate::ui::UiState;

pub const DEFAULT_TOUCH_PERIOD: Duration = Duration::from_millis(TOUCH_TICK_MS);

/// Drives one contact cycle per tick until `stop` is signalled, then returns
/// the dispatcher's counters. A cycle that overruns its tick is not made up:
/// the ticker simply fires again immediately.
pub async fn run_touch_loop<M, S, D, U, H, P, R>(
    dispatcher: &mut TouchDispatcher,
    ctx: &mut TouchContext<'_, S, D, U, H, P, R>,
    period: Duration,
    stop: &Signal<M, ()>,
) -> TouchCounters
where
    M: RawMutex,
    S: TouchSensor,
    D: DelayNs,
    U: UiState,
    H: HistoryLog,
    P: Replication,
    R: Raster,
{
    log::info!("touch: loop start period_ms={}", period.as_millis());
    let mut ticker = Ticker::every(period);
    loop {
        match select(ticker.next(), stop.wait()).await {
            Either::First(()) => {
                // Wraps after ~49 days, same as the u32 timestamps it feeds.
                let now_ms = Instant::now().as_millis() as u32;
                dispatcher.handle_local_touch(now_ms, ctx);
            }
            Either::Second(()) => break,
        }
    }

    let counters = dispatcher.counters();
    log::info!(
        "touch: loop stop cycles={} strokes={} erasures={} suppressed={} resets={}",
        counters.cycles,
        counters.strokes,
        counters.erasures,
        counters.suppressed_erasures,
        counters.resets
    );
    counters
}
