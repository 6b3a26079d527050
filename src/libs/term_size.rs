use std::mem;

/// Returns the terminal width in columns if stdout is a TTY.
pub fn columns() -> Option<usize> {
    unsafe {
        let fd = libc::STDOUT_FILENO;
        let is_tty = libc::isatty(fd) == 1;
        if !is_tty {
            log!("term_size: stdout is not a TTY.");
            return None;
        }

        let mut ws: libc::winsize = mem::zeroed();

        if libc::ioctl(fd, libc::TIOCGWINSZ, &mut ws) != 0 {
            return None;
        }

        let cols = ws.ws_col as usize;
        if cols > 0 {
            Some(cols)
        } else {
            None
        }
    }
}
