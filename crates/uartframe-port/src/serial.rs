use std::fs::{File, OpenOptions};
use std::io::Read;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{PortError, Result};

/// An open serial device configured for reading.
///
/// The device is opened read-only with `O_NOCTTY` so it never becomes the
/// controlling terminal of the calling process. The file descriptor is
/// closed on drop, on every exit path.
#[derive(Debug)]
pub struct SerialPort {
    file: File,
    path: PathBuf,
    baud_rate: u32,
}

impl SerialPort {
    /// Open `path` and apply `baud_rate` via the extended line configuration.
    ///
    /// The rate is written numerically into the input and output speed
    /// fields rather than mapped to a symbolic constant, so non-standard
    /// rates (e.g. 144000) work as long as the driver accepts them.
    pub fn open(path: impl AsRef<Path>, baud_rate: u32) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let file = open_options()
            .open(&path)
            .map_err(|source| PortError::Open {
                path: path.clone(),
                source,
            })?;
        debug!(?path, "serial device opened");

        configure_baud(&file, &path, baud_rate)?;
        info!(?path, baud_rate, "serial port configured");

        Ok(Self {
            file,
            path,
            baud_rate,
        })
    }

    /// The device path this port was opened from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The baud rate applied at open time.
    pub fn baud_rate(&self) -> u32 {
        self.baud_rate
    }
}

impl Read for SerialPort {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.file.read(buf)
    }
}

fn open_options() -> OpenOptions {
    let mut options = OpenOptions::new();
    options.read(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.custom_flags(libc::O_NOCTTY);
    }
    options
}

/// Rewrite a line configuration for an exact numeric baud rate.
///
/// Clears the symbolic rate bits (`CBAUD`), sets the extended-rate flag
/// (`BOTHER`), and writes `baud_rate` into both speed fields.
#[cfg(target_os = "linux")]
pub fn apply_custom_baud(tio: &mut libc::termios2, baud_rate: u32) {
    tio.c_cflag &= !libc::CBAUD;
    tio.c_cflag |= libc::BOTHER;
    tio.c_ispeed = baud_rate;
    tio.c_ospeed = baud_rate;
}

#[cfg(target_os = "linux")]
fn configure_baud(file: &File, path: &Path, baud_rate: u32) -> Result<()> {
    use std::os::unix::io::AsRawFd;

    let fd = file.as_raw_fd();
    let configure_err = |source: std::io::Error| PortError::Configure {
        path: path.to_path_buf(),
        source,
    };

    // SAFETY: fd is owned and open; TCGETS2/TCSETS2 read/write a termios2
    // struct of the size the kernel expects.
    let mut tio: libc::termios2 = unsafe { std::mem::zeroed() };
    if unsafe { libc::ioctl(fd, libc::TCGETS2, &mut tio) } < 0 {
        return Err(configure_err(std::io::Error::last_os_error()));
    }

    apply_custom_baud(&mut tio, baud_rate);

    if unsafe { libc::ioctl(fd, libc::TCSETS2, &tio) } < 0 {
        return Err(configure_err(std::io::Error::last_os_error()));
    }
    Ok(())
}

#[cfg(not(target_os = "linux"))]
fn configure_baud(_file: &File, _path: &Path, _baud_rate: u32) -> Result<()> {
    Err(PortError::Unsupported)
}
