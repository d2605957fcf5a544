//! Exit handling: signal handlers, terminal restore, and core dump policy.

/// Restore cooked mode on stdin directly through termios.
fn restore_termios() {
    unsafe {
        let mut termios: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(0, &mut termios) == 0 {
            termios.c_oflag |= libc::OPOST | libc::ONLCR;
            termios.c_lflag |= libc::ICANON | libc::ECHO | libc::ISIG;
            libc::tcsetattr(0, libc::TCSANOW, &termios);
        }
    }
}

/// Registered with atexit.
extern "C" fn cleanup_on_exit() {
    restore_termios();
    // Only emit escapes to a TTY; piped wordlists must stay clean.
    unsafe {
        if libc::isatty(1) == 1 {
            let seq = b"\x1b[0m\x1b[?25h\r\n";
            libc::write(1, seq.as_ptr() as *const libc::c_void, seq.len());
        }
    }
}

/// SIGINT/SIGTERM/SIGHUP: exit, atexit restores the terminal.
extern "C" fn signal_handler(_: libc::c_int) {
    unsafe { libc::exit(130) }
}

/// SIGSEGV/SIGABRT: restore the terminal, then re-raise with the default action.
extern "C" fn crash_handler(sig: libc::c_int) {
    restore_termios();
    unsafe {
        libc::signal(sig, libc::SIG_DFL);
        libc::raise(sig);
    }
}

/// Install handlers and the atexit hook. Call first thing in main.
pub fn install_handlers() {
    let on_signal = signal_handler as *const () as libc::sighandler_t;
    let on_crash = crash_handler as *const () as libc::sighandler_t;
    unsafe {
        libc::atexit(cleanup_on_exit);
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, on_signal);
        }
        for sig in [libc::SIGSEGV, libc::SIGABRT] {
            libc::signal(sig, on_crash);
        }
    }
}

/// Profiles hold personal data; keep it out of core dumps.
pub fn disable_core_dumps() {
    #[cfg(any(target_os = "linux", target_os = "android"))]
    unsafe {
        libc::prctl(libc::PR_SET_DUMPABLE, 0);
    }
}

pub fn reset_terminal() {
    restore_termios();
}
