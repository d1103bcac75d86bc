//! src/input/source.rs
//!
//! Reader threads for stdin, a serial port, or a synthetic random walk.

use std::io::{self, BufRead, BufReader};
use std::sync::mpsc::{self, Receiver, SyncSender, TryRecvError};
use std::thread;
use std::time::Duration;

use rand::Rng;

use super::parse::parse_sample;
use crate::error::InputError;

/// Ticks a reader may queue ahead of the main loop before it blocks. Two
/// frames' worth at the loop's per-frame drain limit.
pub const CHANNEL_CAPACITY: usize = 8_192;

/// Fastest demo rate; higher (or non-finite) requests are clamped.
pub const MAX_DEMO_RATE_HZ: f64 = 10_000.0;
const MIN_DEMO_RATE_HZ: f64 = 0.1;

/// One line's worth of input.
#[derive(Clone, Debug, PartialEq)]
pub enum Tick {
    Sample(f64),
    Malformed(InputError),
}

/// Where samples come from.
#[derive(Clone, Debug)]
pub enum SourceKind {
    Stdin,
    Serial { port: String, baud: u32 },
    Demo { rate_hz: f64 },
}

/// Outcome of polling the feed once.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Poll {
    /// A new sample to ingest.
    Sample(f64),
    /// A tick that produced nothing usable; skip it.
    Skip,
    /// Nothing pending right now, or the source is gone.
    Idle,
}

/// Non-blocking receiving end of a source.
pub struct InputFeed {
    rx: Receiver<Tick>,
    exhausted: bool,
}

impl InputFeed {
    /// Start the reader thread for `kind`.
    pub fn spawn(kind: SourceKind) -> Self {
        match kind {
            SourceKind::Stdin => Self::spawn_reader(|tx| {
                log::info!("reading samples from stdin");
                pump_lines(io::stdin().lock(), &tx);
                log::info!("stdin closed");
            }),
            SourceKind::Serial { port, baud } => {
                Self::spawn_reader(move |tx| read_serial(&port, baud, &tx))
            }
            SourceKind::Demo { rate_hz } => Self::spawn_reader(move |tx| random_walk(rate_hz, &tx)),
        }
    }

    /// Run `reader` on its own thread, feeding a channel bounded at
    /// [`CHANNEL_CAPACITY`]. The reader blocks once the loop falls behind.
    pub fn spawn_reader<F>(reader: F) -> Self
    where
        F: FnOnce(SyncSender<Tick>) + Send + 'static,
    {
        let (tx, rx) = mpsc::sync_channel(CHANNEL_CAPACITY);
        thread::spawn(move || reader(tx));
        Self::from_receiver(rx)
    }

    pub fn from_receiver(rx: Receiver<Tick>) -> Self {
        Self {
            rx,
            exhausted: false,
        }
    }

    /// True once every sender has gone away.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    pub fn poll(&mut self) -> Poll {
        if self.exhausted {
            return Poll::Idle;
        }
        match self.rx.try_recv() {
            Ok(Tick::Sample(v)) => Poll::Sample(v),
            Ok(Tick::Malformed(e)) => {
                if let Some(level) = skip_level(&e) {
                    log::log!(level, "skipping input line: {}", e);
                }
                Poll::Skip
            }
            Err(TryRecvError::Empty) => Poll::Idle,
            Err(TryRecvError::Disconnected) => {
                log::info!("input source exhausted");
                self.exhausted = true;
                Poll::Idle
            }
        }
    }
}

/// Log level for a skipped line. Kept below the default filter: the
/// terminal UI shares stderr, and a noisy source would repaint over it.
fn skip_level(err: &InputError) -> Option<log::Level> {
    match err {
        InputError::Empty => None,
        InputError::Malformed(_) => Some(log::Level::Debug),
    }
}

fn classify(line: &str) -> Tick {
    match parse_sample(line) {
        Ok(v) => Tick::Sample(v),
        Err(e) => Tick::Malformed(e),
    }
}

/// Parse every line of `reader` and forward it. Returns when the reader
/// ends, fails, or the receiver is dropped.
///
/// A read timeout keeps whatever part of the line has arrived so far; the
/// rest is appended on the next read.
pub fn pump_lines<R: BufRead>(mut reader: R, tx: &SyncSender<Tick>) {
    let mut line = String::new();
    loop {
        match reader.read_line(&mut line) {
            Ok(0) => {
                if !line.is_empty() {
                    let _ = tx.send(classify(&line));
                }
                break;
            }
            // without a newline this is the tail before EOF; the next read
            // returns 0 and flushes it
            Ok(_) if !line.ends_with('\n') => {}
            Ok(_) => {
                let tick = classify(&line);
                line.clear();
                if tx.send(tick).is_err() {
                    break;
                }
            }
            Err(e) if e.kind() == io::ErrorKind::TimedOut => {}
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                log::debug!("dropping non-UTF-8 input: {}", e);
                line.clear();
            }
            Err(e) => {
                log::error!("error reading input: {}", e);
                break;
            }
        }
    }
}

fn read_serial(port_name: &str, baud: u32, tx: &SyncSender<Tick>) {
    log::info!("opening serial port {} @ {} baud", port_name, baud);
    let port = match serialport::new(port_name, baud)
        .timeout(Duration::from_secs(10))
        .open()
    {
        Ok(p) => p,
        Err(e) => {
            log::error!("failed to open serial port {}: {}", port_name, e);
            return;
        }
    };
    pump_lines(BufReader::new(port), tx);
    log::info!("serial reader on {} exiting", port_name);
}

/// Sleep between demo samples for a requested rate.
fn demo_period(rate_hz: f64) -> Duration {
    let rate = if rate_hz.is_nan() {
        MIN_DEMO_RATE_HZ
    } else {
        rate_hz.clamp(MIN_DEMO_RATE_HZ, MAX_DEMO_RATE_HZ)
    };
    Duration::from_secs_f64(1.0 / rate)
}

fn random_walk(rate_hz: f64, tx: &SyncSender<Tick>) {
    let period = demo_period(rate_hz);
    let mut rng = rand::rng();
    let mut value = 0.0_f64;
    loop {
        value += rng.random_range(-1.0..=1.0);
        if tx.send(Tick::Sample(value)).is_err() {
            break;
        }
        thread::sleep(period);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;
    use std::io::{Cursor, Read};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn collect(reader: impl BufRead) -> Vec<Tick> {
        let (tx, rx) = mpsc::sync_channel(16);
        pump_lines(reader, &tx);
        drop(tx);
        rx.iter().collect()
    }

    #[test]
    fn pump_lines_classifies_each_line() {
        assert_eq!(
            collect(Cursor::new("1.5\n\nfoo\n-2\n")),
            vec![
                Tick::Sample(1.5),
                Tick::Malformed(InputError::Empty),
                Tick::Malformed(InputError::Malformed("foo".into())),
                Tick::Sample(-2.0),
            ]
        );
    }

    /// Hands out canned chunks and errors, one per read.
    struct Chunked {
        chunks: VecDeque<io::Result<&'static [u8]>>,
    }

    impl Read for Chunked {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            match self.chunks.pop_front() {
                None => Ok(0),
                Some(Err(e)) => Err(e),
                Some(Ok(bytes)) => {
                    buf[..bytes.len()].copy_from_slice(bytes);
                    Ok(bytes.len())
                }
            }
        }
    }

    #[test]
    fn timeout_mid_line_keeps_the_partial_line() {
        let timed_out = || Err(io::Error::from(io::ErrorKind::TimedOut));
        let reader = Chunked {
            chunks: VecDeque::from(vec![
                Ok(&b"12"[..]),
                timed_out(),
                Ok(&b"34\n5"[..]),
                timed_out(),
                Ok(&b"\n-7"[..]),
            ]),
        };
        assert_eq!(
            collect(BufReader::new(reader)),
            vec![Tick::Sample(1234.0), Tick::Sample(5.0), Tick::Sample(-7.0)]
        );
    }

    #[test]
    fn feed_skips_bad_ticks_and_reports_exhaustion() {
        let (tx, rx) = mpsc::sync_channel(4);
        let mut feed = InputFeed::from_receiver(rx);
        assert_eq!(feed.poll(), Poll::Idle);
        tx.send(Tick::Malformed(InputError::Malformed("x".into())))
            .unwrap();
        tx.send(Tick::Sample(-4.0)).unwrap();
        drop(tx);
        assert_eq!(feed.poll(), Poll::Skip);
        assert_eq!(feed.poll(), Poll::Sample(-4.0));
        assert!(!feed.is_exhausted());
        assert_eq!(feed.poll(), Poll::Idle);
        assert!(feed.is_exhausted());
        assert_eq!(feed.poll(), Poll::Idle);
    }

    #[test]
    fn skipped_lines_stay_below_the_default_filter() {
        assert_eq!(skip_level(&InputError::Empty), None);
        let level = skip_level(&InputError::Malformed("x".into())).unwrap();
        assert!(level > log::Level::Warn);
    }

    #[test]
    fn backlog_is_bounded_when_the_loop_stalls() {
        let sent = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&sent);
        let mut feed = InputFeed::spawn_reader(move |tx| {
            while tx.send(Tick::Sample(1.0)).is_ok() {
                counter.fetch_add(1, Ordering::SeqCst);
            }
        });

        thread::sleep(Duration::from_millis(200));
        assert!(sent.load(Ordering::SeqCst) <= CHANNEL_CAPACITY);

        let mut queued = 0;
        while feed.poll() == Poll::Sample(1.0) && queued <= 2 * CHANNEL_CAPACITY {
            queued += 1;
        }
        assert!(queued >= CHANNEL_CAPACITY);
        drop(feed);
    }

    #[test]
    fn demo_rate_is_clamped() {
        assert_eq!(
            demo_period(f64::INFINITY),
            Duration::from_secs_f64(1.0 / MAX_DEMO_RATE_HZ)
        );
        assert_eq!(demo_period(f64::NAN), Duration::from_secs(10));
        assert_eq!(demo_period(0.0), Duration::from_secs(10));
        assert_eq!(demo_period(100.0), Duration::from_millis(10));
    }
}
