//! Rendering images on screen by handing them over to the OS image viewer
use crate::prelude::*;
use crate::Result;
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat};
use std::path::Path;
use std::process::{Child, Command, ExitStatus};
use std::thread;

/// Side of the square preview that is shown to the user
const PREVIEW_SIDE: u32 = 450;

/// Writes a square preview of the image to a temporary PNG file and opens it
/// with the default viewer. Doesn't wait for the viewer to exit, the process
/// is reaped in the background.
///
/// The preview file stays in the system temp directory, because the viewer
/// may read it at any point after this function returns. Its path is logged.
pub(crate) fn show(image: &DynamicImage, name: &str) -> Result {
    let preview = image.resize_exact(PREVIEW_SIDE, PREVIEW_SIDE, FilterType::Lanczos3);

    let path = tempfile::Builder::new()
        .prefix(&format!("{name}-"))
        .suffix(".png")
        .tempfile()?
        .into_temp_path()
        // The viewer reads the file asynchronously, so it must outlive us
        .keep()
        .fatal_ctx(|| "Failed to persist the image preview file")?;

    preview.save_with_format(&path, ImageFormat::Png)?;

    let child = open_command(&path)
        .spawn()
        .fatal_ctx(|| format!("Failed to launch the image viewer for {}", path.display()))?;

    info!(path = %path.display(), pid = child.id(), "Opened the image viewer");

    reap(child);

    Ok(())
}

/// Waits for the child on a detached thread so that it doesn't stay a zombie
fn reap(mut child: Child) -> thread::JoinHandle<Option<ExitStatus>> {
    let dispatch = tracing::dispatcher::get_default(Clone::clone);

    thread::spawn(move || {
        tracing::dispatcher::with_default(&dispatch, || {
            let pid = child.id();
            match child.wait() {
                Ok(status) => {
                    debug!(pid, %status, "Image viewer exited");
                    Some(status)
                }
                Err(err) => {
                    warn!(pid, err = tracing_err(&err), "Failed to wait for the image viewer");
                    None
                }
            }
        })
    })
}

fn open_command(path: &Path) -> Command {
    let mut cmd = if cfg!(target_os = "macos") {
        Command::new("open")
    } else if cfg!(target_os = "windows") {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", ""]);
        cmd
    } else {
        Command::new("xdg-open")
    };
    cmd.arg(path);
    cmd
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test_log::test]
    fn viewer_process_is_reaped() {
        let child = Command::new("true").spawn().unwrap();

        let status = reap(child).join().unwrap();

        assert!(status.unwrap().success());
    }
}
