//! Span timing for the hot search functions.
//!
//! Built only with `--features instrumentation`. `negamax`, `evaluate` and
//! `is_threatening_king` carry `#[instrument]` spans; the layer below counts
//! how often each one is entered and how long it ran.

use std::cmp::Reverse;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use thread_local::ThreadLocal;
use tracing::span;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer};

#[derive(Default, Clone, Copy, Debug)]
pub struct SpanTiming {
    pub calls: u64,
    pub total: Duration,
}

impl SpanTiming {
    fn record(&mut self, elapsed: Duration) {
        self.calls += 1;
        self.total += elapsed;
    }

    fn merge(&mut self, other: &SpanTiming) {
        self.calls += other.calls;
        self.total += other.total;
    }

    pub fn average(&self) -> Duration {
        if self.calls == 0 {
            Duration::default()
        } else {
            self.total / self.calls as u32
        }
    }
}

type Timings = FxHashMap<&'static str, SpanTiming>;

// The search worker runs on its own thread, so each thread keeps its own map.
static TIMINGS: Lazy<ThreadLocal<Mutex<Timings>>> = Lazy::new(ThreadLocal::new);

struct TimingLayer;

impl<S> Layer<S> for TimingLayer
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_enter(&self, id: &span::Id, ctx: Context<'_, S>) {
        if let Some(span) = ctx.span(id) {
            span.extensions_mut().insert(Instant::now());
        }
    }

    fn on_exit(&self, id: &span::Id, ctx: Context<'_, S>) {
        let span = match ctx.span(id) {
            Some(span) => span,
            None => return,
        };
        let started = span.extensions_mut().remove::<Instant>();
        if let Some(started) = started {
            let cell = TIMINGS.get_or(|| Mutex::new(Timings::default()));
            if let Ok(mut timings) = cell.lock() {
                timings
                    .entry(span.name())
                    .or_default()
                    .record(started.elapsed());
            }
        }
    }
}

/// Installs the timing layer. With `RUST_LOG` set, span events are printed
/// as well.
pub fn init_tracing() {
    let verbose = std::env::var("RUST_LOG")
        .map_or(false, |filter| !filter.is_empty() && filter != "off");

    let result = if verbose {
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .compact();
        tracing::subscriber::set_global_default(
            tracing_subscriber::registry()
                .with(EnvFilter::from_default_env())
                .with(TimingLayer)
                .with(fmt_layer),
        )
    } else {
        tracing::subscriber::set_global_default(
            tracing_subscriber::registry()
                .with(EnvFilter::new("trace"))
                .with(TimingLayer),
        )
    };

    if let Err(err) = result {
        eprintln!("could not install the timing subscriber: {}", err);
    }
}

/// Timings summed over every thread, slowest total first.
pub fn collect_timings() -> Vec<(&'static str, SpanTiming)> {
    let mut summed = Timings::default();
    for cell in TIMINGS.iter() {
        if let Ok(timings) = cell.lock() {
            for (name, timing) in timings.iter() {
                summed.entry(*name).or_default().merge(timing);
            }
        }
    }

    let mut entries: Vec<_> = summed.into_iter().collect();
    entries.sort_by_key(|(_, timing)| Reverse(timing.total));
    entries
}

pub fn print_timing_statistics() {
    let entries = collect_timings();
    if entries.is_empty() {
        eprintln!("\nNo timing data collected.");
        return;
    }

    eprintln!("\n{:=<72}", "");
    eprintln!(
        "{:<32} {:>12} {:>12} {:>12}",
        "Span", "Calls", "Total (ms)", "Avg (µs)"
    );
    eprintln!("{:-<72}", "");
    for (name, timing) in &entries {
        eprintln!(
            "{:<32} {:>12} {:>12.2} {:>12.2}",
            name,
            timing.calls,
            timing.total.as_secs_f64() * 1_000.0,
            timing.average().as_secs_f64() * 1_000_000.0
        );
    }
    eprintln!("{:-<72}", "");
}
