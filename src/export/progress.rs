//! File output with a live progress box, interruptible with Esc or Ctrl+C.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyModifiers};

use profilelist::wordlist::output::write_lines;

use crate::terminal::{
    HIDE_CURSOR, RawModeGuard, SHOW_CURSOR, box_bottom, box_line, box_top, flush, format_number,
    print_centered, progress_bar_box, reset_terminal,
};

/// Words written between progress redraws and interrupt checks.
const CHUNK: usize = 10_000;

pub enum Outcome {
    Complete(usize),
    Interrupted(usize),
}

/// Report Esc or Ctrl+C once, until the returned sender fires or drops.
fn spawn_key_listener() -> (Receiver<()>, Sender<()>) {
    let (tx, rx) = mpsc::channel();
    let (close_tx, close_rx) = mpsc::channel::<()>();

    thread::spawn(move || {
        loop {
            if let Ok(_) | Err(TryRecvError::Disconnected) = close_rx.try_recv() {
                break;
            }
            if !event::poll(Duration::from_millis(20)).unwrap_or(false) {
                continue;
            }
            if let Ok(Event::Key(key)) = event::read() {
                let ctrl_c = key.code == KeyCode::Char('c')
                    && key.modifiers.contains(KeyModifiers::CONTROL);
                if ctrl_c || key.code == KeyCode::Esc {
                    let _ = tx.send(());
                    break;
                }
            }
        }
    });

    (rx, close_tx)
}

fn write_chunks(
    out: &mut BufWriter<File>,
    words: &[String],
    interrupt: &Receiver<()>,
    start: Instant,
) -> io::Result<Outcome> {
    let total = words.len();
    let mut written = 0;

    for chunk in words.chunks(CHUNK) {
        if interrupt.try_recv().is_ok() {
            out.flush()?;
            return Ok(Outcome::Interrupted(written));
        }

        write_lines(out, chunk)?;
        written += chunk.len();

        let pct = written as f32 / total as f32 * 100.0;
        let per_word = start.elapsed().as_secs_f32() / written as f32;
        let eta = per_word * (total - written) as f32;
        let stats = format!(
            "{} of {} • {:.1}% • ETA: {:.1}s",
            format_number(written),
            format_number(total),
            pct,
            eta
        );
        progress_bar_box(pct, &stats);
    }

    out.flush()?;
    Ok(Outcome::Complete(written))
}

/// Write `words` to `file`, redrawing a progress box as chunks land.
pub fn write_with_progress(words: &[String], file: File, path: &str) -> io::Result<Outcome> {
    box_top("Writing");
    box_line(&format!("{} word(s)", format_number(words.len())));
    box_line(&format!("Output: {path}"));
    box_bottom();
    println!();
    print_centered("[Esc/Ctrl+C] to interrupt");
    print!("{HIDE_CURSOR}\n\n\n");
    flush();

    let start = Instant::now();
    let mut out = BufWriter::new(file);

    let guard = RawModeGuard::new().ok();
    let (interrupt, close) = spawn_key_listener();
    let result = write_chunks(&mut out, words, &interrupt, start);
    let _ = close.send(());
    drop(guard);

    print!("{SHOW_CURSOR}");
    reset_terminal();

    let outcome = result?;
    let elapsed = start.elapsed().as_millis();
    println!();
    match outcome {
        Outcome::Complete(n) => {
            box_top("Complete");
            box_line(&format!("{} word(s) written in {elapsed}ms", format_number(n)));
        }
        Outcome::Interrupted(n) => {
            box_top("Interrupted");
            box_line(&format!(
                "{} of {} word(s) written in {elapsed}ms",
                format_number(n),
                format_number(words.len())
            ));
        }
    }
    box_line(&format!("Output: {path}"));
    box_bottom();
    println!();

    Ok(outcome)
}
