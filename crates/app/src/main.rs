use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use turntable_core::{
    sink, AlbumLibrary, AnimationSettings, LibraryCatalog, Sink, TrackCatalog, Turntable,
};

fn main() -> turntable_core::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    match cli.command {
        Commands::Inspect { library } => run_inspect(&library),
        Commands::Simulate {
            library,
            album,
            track,
            paused,
            step_ms,
            duration_ms,
        } => run_simulate(&library, album, track, paused, step_ms, duration_ms),
    }
}

fn run_inspect(path: &Path) -> turntable_core::Result<()> {
    let settings = AnimationSettings::default();
    let catalog = load_catalog(path, &settings)?;
    for (index, album) in catalog.library().albums.iter().enumerate() {
        let artist = album.artist.as_deref().unwrap_or("unknown artist");
        println!("[{index}] {} — {artist}", album.title);
        for (position, entry) in album.tracks.iter().enumerate() {
            let groove = catalog
                .seek_position(index as i32, position as i32)
                .unwrap_or(0.0);
            println!(
                "  {position}: {} ({}) groove at {groove:.3} turns",
                entry.title, entry.filename
            );
        }
    }
    Ok(())
}

fn run_simulate(
    path: &Path,
    album: i32,
    track: i32,
    paused: bool,
    step_ms: f64,
    duration_ms: f64,
) -> turntable_core::Result<()> {
    tracing::info!(album, track, paused, "starting simulation");

    let settings = AnimationSettings::default();
    let catalog = load_catalog(path, &settings)?;
    let mut turntable = Turntable::new(settings.clone());
    let mut sink = TracingSink::new(settings);

    turntable.set_target(album, track, !paused);
    let mut elapsed = 0.0;
    while elapsed < duration_ms {
        turntable.tick(step_ms, &mut sink, &catalog);
        elapsed += step_ms;
    }

    tracing::info!(
        album = turntable.current_album(),
        track = turntable.current_track(),
        rotation = turntable.rotation(),
        audio = turntable.is_audio_playing(),
        "simulation finished"
    );
    Ok(())
}

fn load_catalog(path: &Path, settings: &AnimationSettings) -> turntable_core::Result<LibraryCatalog> {
    let data = std::fs::read_to_string(path)?;
    let library = AlbumLibrary::from_json(&data)?;
    Ok(LibraryCatalog::new(library, settings))
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .try_init();
}

/// Presentation stand-in that reports coordinator output through `tracing`.
///
/// Visual setters are deduplicated (a real renderer would diff the same way)
/// and mapped to their on-screen quantities; transport calls and sound cues
/// are logged as events.
struct TracingSink {
    settings: AnimationSettings,
    track: i32,
    needle_lift: f64,
    record_lift: f64,
    rotation: f64,
    glow_phase: f64,
}

impl TracingSink {
    fn new(settings: AnimationSettings) -> Self {
        Self {
            settings,
            track: 0,
            needle_lift: 0.0,
            record_lift: 0.0,
            rotation: 0.0,
            glow_phase: 0.0,
        }
    }
}

impl Sink for TracingSink {
    fn set_needle_lift(&mut self, fraction: f64) {
        if fraction != self.needle_lift {
            self.needle_lift = fraction;
            let angle = sink::needle_angle(&self.settings, 1.0 - fraction, self.track);
            tracing::debug!(lift = fraction, angle, "needle");
        }
    }

    fn set_record_lift(&mut self, fraction: f64) {
        if fraction != self.record_lift {
            self.record_lift = fraction;
            let offset = sink::record_offset(&self.settings, fraction);
            tracing::debug!(lift = fraction, offset, "record");
        }
    }

    fn set_rotation(&mut self, turns: f64) {
        if turns != self.rotation {
            self.rotation = turns;
            tracing::trace!(turns, "rotation");
        }
    }

    fn set_glow_phase(&mut self, phase: f64) {
        if phase != self.glow_phase {
            self.glow_phase = phase;
            let blur = sink::glow_blur(&self.settings, phase);
            tracing::trace!(phase, blur, "glow");
        }
    }

    fn set_album_art(&mut self, album: i32) {
        tracing::info!(album, "album artwork swapped");
    }

    fn play_audio(&mut self, album: i32, track: i32) {
        self.track = track;
        tracing::info!(album, track, "audio playing");
    }

    fn pause_audio(&mut self) {
        tracing::info!("audio paused");
    }

    fn sound_effect_insert(&mut self) {
        tracing::info!("sfx: record insert");
    }

    fn sound_effect_remove(&mut self) {
        tracing::info!("sfx: record remove");
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Virtual turntable simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the albums and computed groove positions in a library file.
    Inspect {
        /// Path to the album library JSON.
        library: PathBuf,
    },
    /// Drive the animation coordinator against a library and log its output.
    Simulate {
        /// Path to the album library JSON.
        library: PathBuf,
        /// Album index to target.
        #[arg(short, long, default_value_t = 0)]
        album: i32,
        /// Track index to target.
        #[arg(short, long, default_value_t = 0)]
        track: i32,
        /// Select the target without starting playback.
        #[arg(long)]
        paused: bool,
        /// Milliseconds advanced per simulated frame.
        #[arg(long, default_value_t = 16.0)]
        step_ms: f64,
        /// Total simulated wall-clock time in milliseconds.
        #[arg(long, default_value_t = 5000.0)]
        duration_ms: f64,
    },
}
