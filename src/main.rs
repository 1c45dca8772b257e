mod app;
mod config;
mod field;
mod input;
mod logging;
mod math;
mod star;
mod surface;
mod types;
mod ui;

use app::App;
use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use futures::{Stream, StreamExt};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io::{self, Stdout};
use std::pin::pin;
use std::time::Duration;
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, error, info};

const TITLE: &str = "Starfield";

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();
    info!("Starfield v{}", env!("CARGO_PKG_VERSION"));

    let config = match config::load_config() {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "invalid config");
            return Err(e.into());
        }
    };

    // Terminal setup, undone when the guard drops
    let (_guard, mut terminal) = logged(setup_terminal(), "terminal setup")?;
    let columns = logged(terminal.size(), "terminal setup")?.width;

    let mut app = App::new(&config, columns);
    logged(
        run_app(&mut terminal, &mut app, EventStream::new(), config.target_fps).await,
        "event loop",
    )?;
    info!("bye");
    Ok(())
}

/// Log a failed `stage` before handing the error back to the caller.
fn logged<T>(result: io::Result<T>, stage: &str) -> io::Result<T> {
    result.map_err(|e| {
        error!(error = %e, "{} failed", stage);
        e
    })
}

fn setup_terminal() -> io::Result<(TerminalGuard, Terminal<CrosstermBackend<Stdout>>)> {
    let guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    terminal.clear()?;
    Ok((guard, terminal))
}

/// Raw mode, alternate screen and mouse capture for as long as it lives.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        // Constructed before the rest so a failure below still restores raw mode.
        let guard = TerminalGuard;
        execute!(
            io::stdout(),
            EnterAlternateScreen,
            EnableMouseCapture,
            SetTitle(TITLE)
        )?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen, Show);
        let _ = disable_raw_mode();
    }
}

/// Time between frames for a target rate.
fn frame_period(target_fps: u32) -> Duration {
    Duration::from_secs_f64(1.0 / f64::from(target_fps.max(1)))
}

/// Drive the field until a quit is requested. Pending input is always
/// drained before the next frame so a quit is never followed by a render.
async fn run_app<B, S>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    events: S,
    target_fps: u32,
) -> io::Result<()>
where
    B: Backend,
    S: Stream<Item = io::Result<Event>>,
{
    let mut events = pin!(events);
    let mut ticker = time::interval(frame_period(target_fps));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    while !app.should_quit {
        tokio::select! {
            biased;

            event = events.next() => match event {
                Some(Ok(event)) => input::handle_event(app, &event),
                Some(Err(e)) => return Err(e),
                None => {
                    debug!("input stream closed");
                    app.quit();
                }
            },
            _ = ticker.tick() => {
                app.render_frame();
                terminal.draw(|f| ui::draw(f, app))?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Config;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
    use futures::stream;
    use ratatui::backend::TestBackend;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::FmtSubscriber;

    #[derive(Clone, Default)]
    struct SharedLog(Arc<Mutex<Vec<u8>>>);

    impl io::Write for SharedLog {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn test_app() -> App {
        let config = Config {
            star_count: 50,
            seed: Some(2024),
            ..Config::default()
        };
        App::new(&config, 80)
    }

    fn test_terminal() -> Terminal<TestBackend> {
        Terminal::new(TestBackend::new(80, 24)).unwrap()
    }

    fn quit_key() -> io::Result<Event> {
        Ok(Event::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE)))
    }

    fn pointer(column: u16) -> io::Result<Event> {
        Ok(Event::Mouse(MouseEvent {
            kind: MouseEventKind::Moved,
            column,
            row: 0,
            modifiers: KeyModifiers::NONE,
        }))
    }

    #[test]
    fn frame_period_tracks_target_rate() {
        assert_eq!(frame_period(50), Duration::from_millis(20));
        assert_eq!(frame_period(1), Duration::from_secs(1));
        assert_eq!(frame_period(0), Duration::from_secs(1));
    }

    #[tokio::test]
    async fn quit_stops_before_the_next_frame() {
        let mut terminal = test_terminal();
        let mut app = test_app();
        let events = stream::iter(vec![pointer(10), quit_key()]).chain(stream::pending());

        run_app(&mut terminal, &mut app, events, 60).await.unwrap();

        assert!(app.should_quit);
        assert_eq!(app.frames, 0);
        assert_eq!(app.pointer_column, 10);
    }

    #[tokio::test]
    async fn closed_input_ends_the_loop() {
        let mut terminal = test_terminal();
        let mut app = test_app();

        run_app(&mut terminal, &mut app, stream::empty(), 60).await.unwrap();

        assert!(app.should_quit);
        assert_eq!(app.frames, 0);
    }

    #[tokio::test]
    async fn input_errors_are_returned() {
        let mut terminal = test_terminal();
        let mut app = test_app();
        let events = stream::iter(vec![Err(io::Error::other("tty gone"))]);

        let err = run_app(&mut terminal, &mut app, events, 60)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "tty gone");
    }

    #[tokio::test]
    async fn frames_render_while_waiting_for_input() {
        let mut terminal = test_terminal();
        let mut app = test_app();
        let late_quit = stream::once(async {
            time::sleep(Duration::from_millis(150)).await;
            quit_key()
        });

        run_app(&mut terminal, &mut app, late_quit, 60).await.unwrap();

        assert!(app.should_quit);
        assert!(app.frames >= 2, "only {} frames", app.frames);

        let buffer = terminal.backend().buffer();
        let drawn = buffer.content().iter().filter(|c| c.symbol() != " ").count();
        assert!(drawn > 0);
    }

    #[test]
    fn setup_failures_are_logged() {
        let log = SharedLog::default();
        let writer = log.clone();
        let subscriber = FmtSubscriber::builder()
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let result: io::Result<()> = tracing::subscriber::with_default(subscriber, || {
            logged(Err(io::Error::other("not a tty")), "terminal setup")
        });

        assert_eq!(result.unwrap_err().to_string(), "not a tty");
        let output = String::from_utf8(log.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("ERROR"), "{output}");
        assert!(output.contains("terminal setup failed"), "{output}");
        assert!(output.contains("not a tty"), "{output}");
    }

    #[test]
    fn successful_stages_pass_through() {
        assert_eq!(logged(Ok(7), "terminal setup").unwrap(), 7);
    }

    #[tokio::test]
    async fn no_frames_after_quit() {
        let mut terminal = test_terminal();
        let mut app = test_app();
        let events = stream::once(async {
            time::sleep(Duration::from_millis(100)).await;
            quit_key()
        })
        .chain(stream::once(async {
            time::sleep(Duration::from_millis(100)).await;
            pointer(70)
        }))
        .chain(stream::pending());

        time::timeout(
            Duration::from_secs(2),
            run_app(&mut terminal, &mut app, events, 60),
        )
        .await
        .expect("loop kept running after quit")
        .unwrap();

        let frames = app.frames;
        assert!(frames >= 1, "no frames before quit");

        time::sleep(Duration::from_millis(200)).await;
        assert_eq!(app.frames, frames);
        // input after the quit is never read
        assert_eq!(app.pointer_column, 0);
    }
}
