use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use songle::{Result, SongleClient};

#[derive(Parser)]
#[command(name = "songle")]
#[command(version, about = "Query the Songle music-analysis API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch metadata for a song
    Song {
        /// URL of the song on the source website
        url: String,
    },
    /// Fetch the beat map
    Beats {
        url: String,
        /// Saved map version to fetch instead of the latest
        #[arg(long)]
        revision_id: Option<u64>,
    },
    /// Fetch the chord map
    Chords {
        url: String,
        #[arg(long)]
        revision_id: Option<u64>,
    },
    /// Fetch the melody map
    Melody {
        url: String,
        #[arg(long)]
        revision_id: Option<u64>,
    },
    /// Fetch chorus and repeat segments
    Chorus {
        url: String,
        #[arg(long)]
        revision_id: Option<u64>,
    },
    /// List saved versions of an annotation map
    Revisions {
        /// Which map's revisions to list
        #[arg(value_enum)]
        map: MapKind,
        url: String,
    },
    /// Search songs by free text
    Search { query: String },
}

#[derive(Clone, Copy, ValueEnum)]
enum MapKind {
    Beat,
    Chord,
    Melody,
    Chorus,
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    let client = SongleClient::default();

    match &cli.command {
        Commands::Song { url } => print_json(&client.song_info(url).await?),
        Commands::Beats { url, revision_id } => {
            print_json(&client.beats(url, *revision_id).await?)
        }
        Commands::Chords { url, revision_id } => {
            print_json(&client.chords(url, *revision_id).await?)
        }
        Commands::Melody { url, revision_id } => {
            print_json(&client.melody(url, *revision_id).await?)
        }
        Commands::Chorus { url, revision_id } => {
            print_json(&client.chorus(url, *revision_id).await?)
        }
        Commands::Revisions { map, url } => {
            let revisions = match map {
                MapKind::Beat => client.beat_revisions(url).await?,
                MapKind::Chord => client.chord_revisions(url).await?,
                MapKind::Melody => client.melody_revisions(url).await?,
                MapKind::Chorus => client.chorus_revisions(url).await?,
            };
            print_json(&revisions)
        }
        Commands::Search { query } => print_json(&client.search_songs(query).await?),
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
