#[macro_use]
extern crate log;

use bxdf_core::app::*;
use bxdf_core::pbrt::*;
use bxdf_core::reflection::*;
use bxdf_core::sampler::*;
use bxdf_core::spectrum::*;
use bxdfs::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::process::exit;
use std::thread;

fn main() {
    // Initialize `env_logger`.
    env_logger::init();

    match run() {
        Ok(rows) => print_table(&rows),
        Err(e) => {
            error!("{e}");
            exit(1);
        }
    }
}

/// Albedo computed for one view direction.
struct AlbedoRow {
    /// Cosine of the view direction with the normal.
    cos_theta: Float,

    /// Directional albedo.
    albedo: Spectrum,
}

/// Computes the albedo table on worker threads.
fn run() -> Result<Vec<AlbedoRow>, String> {
    let options = &*OPTIONS;
    let color = options.reflectance()?;
    if options.angles == 0 {
        return Err(String::from("Number of angles must be > 0"));
    }

    let factory = GGXFactory::new(&mut LobeRegistry::new());
    let n_threads = options.threads();
    info!(
        "{} with roughness {}, color {}, {} samples x {} angles on {} threads",
        factory, options.roughness, color, options.samples, options.angles, n_threads
    );

    let progress = create_progress_bar(options.angles as u64, options.quiet);
    progress.set_message("Computing albedo");

    let mut rows: Vec<Option<Result<AlbedoRow, String>>> = (0..options.angles).map(|_| None).collect();
    thread::scope(|scope| {
        let (tx_collector, rx_collector) = crossbeam_channel::bounded::<(usize, Result<AlbedoRow, String>)>(n_threads);
        let (tx_worker, rx_worker) = crossbeam_channel::bounded::<usize>(n_threads);

        // Spawn collector thread.
        let rows = rows.as_mut_slice();
        scope.spawn(move || {
            for (i, row) in rx_collector.iter() {
                rows[i] = Some(row);
            }
        });

        // Spawn worker threads.
        for _ in 0..n_threads {
            let rx_worker = rx_worker.clone();
            let tx_collector = tx_collector.clone();
            let factory = &factory;
            let progress = &progress;
            scope.spawn(move || {
                for i in rx_worker.iter() {
                    // Each view direction gets its own random sequence.
                    let mut sampler = RandomSampleSource::new(options.seed.wrapping_add(i as u64));
                    let cos_theta = (i + 1) as Float / options.angles as Float;
                    let row = directional_albedo(
                        factory,
                        color,
                        options.roughness,
                        cos_theta,
                        options.samples,
                        &mut sampler,
                    )
                    .map(|albedo| AlbedoRow { cos_theta, albedo });

                    if tx_collector.send((i, row)).is_err() {
                        break;
                    }
                    progress.inc(1);
                }
            });
        }
        drop(rx_worker); // Drop extra since we've cloned one for each worker.
        drop(tx_collector);

        // Send work.
        for i in 0..options.angles {
            if tx_worker.send(i).is_err() {
                break;
            }
        }
    });

    progress.finish_with_message("Albedo complete");

    rows.into_iter()
        .enumerate()
        .map(|(i, row)| row.unwrap_or_else(|| Err(format!("No result for angle {}", i))))
        .collect()
}

/// Returns a progress bar that is hidden in quiet mode.
///
/// * `len`   - Number of steps.
/// * `quiet` - Hide the progress bar.
fn create_progress_bar(len: u64, quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }

    let style = ProgressStyle::with_template("{msg} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=> ");
    ProgressBar::new(len).with_style(style)
}

/// Prints the albedo table to stdout.
///
/// * `rows` - The albedo for each view direction.
fn print_table(rows: &[AlbedoRow]) {
    println!("{:>10} {:>10} {:>10} {:>10}", "cos_theta", "r", "g", "b");
    for row in rows {
        println!(
            "{:>10.4} {:>10.6} {:>10.6} {:>10.6}",
            row.cos_theta, row.albedo[0], row.albedo[1], row.albedo[2]
        );
    }
}
