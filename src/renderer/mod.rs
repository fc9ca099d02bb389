use crate::camera::{Camera, ScanStrategy, Stripe};
use crate::color::RGBColor;
use crate::film::Film;
use crate::marcher::trace;
use crate::scene::Scene;

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossbeam::channel::unbounded;
use log::{info, warn};
use pbr::ProgressBar;
use rayon::prelude::*;

/// Render the scene through the camera into a finished film. Blocks until
/// every pixel is resolved.
///
/// `threads` ≤ 1 renders every row sequentially on the calling thread.
/// Larger values spawn that many workers, with row `y` owned by worker
/// `y % threads`; the stripes are disjoint by construction, so the workers
/// share the film without locks. The finished image is identical for any
/// worker count.
pub fn render(
    scene: &Scene,
    camera: &Camera,
    strategy: ScanStrategy,
    threads: i32,
) -> Film<RGBColor> {
    let (width, height) = (scene.width, scene.height);
    // zero or negative thread counts also mean sequential
    let workers = threads.max(1) as usize;

    info!(
        "rendering {}x{} px with {} worker(s)",
        width, height, workers
    );

    // stripes left behind by a failed worker stay at the background color
    let mut film = Film::new(width, height, scene.background);

    let progress = Arc::new(AtomicUsize::new(0));
    let finished = Arc::new(AtomicBool::new(false));
    let monitor = spawn_progress_monitor(film.total_pixels(), progress.clone(), finished.clone());

    let now = Instant::now();

    if workers == 1 {
        let counter = progress.clone();
        camera.scan(strategy, width, height, Stripe::full(), &mut |direction, x, y| {
            film.write_at(x, y, trace(scene, camera.location, direction));
            counter.fetch_add(1, Ordering::Relaxed);
        });
    } else {
        let (tx, rx) = unbounded();
        thread::scope(|s| {
            // deal the film's rows out to their owning workers
            let mut stripes: Vec<Vec<&mut [RGBColor]>> =
                (0..workers).map(|_| Vec::new()).collect();
            for (y, row) in film.rows_mut().enumerate() {
                stripes[y % workers].push(row);
            }

            let mut handles = Vec::with_capacity(workers);
            for (id, mut rows) in stripes.into_iter().enumerate() {
                let tx = tx.clone();
                let counter = progress.clone();
                let stripe = Stripe {
                    offset: id,
                    stride: workers,
                };
                handles.push(s.spawn(move || {
                    camera.scan(strategy, width, height, stripe, &mut |direction, x, y| {
                        // image row y is this worker's (y / stride)'th slice
                        rows[y / stripe.stride][x] = trace(scene, camera.location, direction);
                        counter.fetch_add(1, Ordering::Relaxed);
                    });
                    tx.send(id).ok();
                }));
            }
            drop(tx);

            for handle in handles {
                if handle.join().is_err() {
                    warn!("a render worker panicked mid-stripe");
                }
            }
        });

        let completed = rx.try_iter().count();
        if completed != workers {
            warn!(
                "only {}/{} workers signalled completion; unfinished stripes hold the background color",
                completed, workers
            );
        }
    }

    let elapsed = now.elapsed().as_millis() as f32 / 1000.0;
    info!(
        "traced {} pixels in {}s ({} px/s)",
        film.total_pixels(),
        elapsed,
        film.total_pixels() as f32 / elapsed.max(f32::EPSILON)
    );

    finished.store(true, Ordering::Relaxed);
    let _ = monitor.join();

    film
}

/// Drain the shared pixel counter into a progress bar every quarter second
/// until the render reports completion.
fn spawn_progress_monitor(
    total: usize,
    progress: Arc<AtomicUsize>,
    finished: Arc<AtomicBool>,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let mut pb = ProgressBar::new(total as u64);
        let mut local = 0usize;
        loop {
            let current = progress.load(Ordering::Relaxed);
            if current > local {
                pb.add((current - local) as u64);
                local = current;
            }
            if local >= total || finished.load(Ordering::Relaxed) {
                break;
            }
            thread::sleep(Duration::from_millis(250));
        }
        pb.finish();
    })
}

/// Encode a finished film as a PNG at `filename`. The film's row 0 is the
/// bottom of the frame; image formats put row 0 at the top, so rows are
/// flipped while packing.
pub fn output_film(film: &Film<RGBColor>, filename: &str) -> Result<()> {
    let (width, height) = (film.width, film.height);

    let mut raw = vec![0u8; width * height * 3];
    raw.par_chunks_mut(width * 3)
        .enumerate()
        .for_each(|(image_row, row)| {
            let film_row = height - 1 - image_row;
            for x in 0..width {
                let color = film.at(x, film_row);
                row[x * 3] = color.r;
                row[x * 3 + 1] = color.g;
                row[x * 3 + 2] = color.b;
            }
        });

    let img: image::RgbImage = image::ImageBuffer::from_raw(width as u32, height as u32, raw)
        .context("film dimensions do not match the encoded buffer")?;
    img.save(filename)
        .with_context(|| format!("failed to write image to {}", filename))?;

    info!("saved {}x{} render to {}", width, height, filename);
    Ok(())
}
