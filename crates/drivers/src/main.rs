mod config;
mod logging;

use std::process::ExitCode;

use config::AppConfig;
use memeforge_adapters::{
    present_entry_row, present_loaded, present_saved, present_share_outcome, FsExportSink,
    HeadlessClipboard, HeadlessShareTarget, ImageCrateDecoder, ResvgFrameRenderer,
    SqliteStorageSlot, SystemClock, UuidIdGenerator,
};
use memeforge_application::{
    ClearGalleryCommand, EditorService, ExportEntryCommand, ExportFrameCommand, GalleryStore,
    ListGalleryCommand, LoadImageCommand, ReuseEntryCommand, SaveToGalleryCommand,
    SetCaptionsCommand, SetStyleCommand, ShareFrameCommand,
};
use memeforge_domain::{Color, DEFAULT_FONT_SIZE, DEFAULT_OUTLINE_COLOR, DEFAULT_TEXT_COLOR};

fn main() -> ExitCode {
    logging::init_logging();
    let args: Vec<String> = std::env::args().collect();
    let config = AppConfig::default();

    let slot = SqliteStorageSlot::new(config.gallery_path.clone(), config.gallery_key.clone());
    if let Err(error) = slot.initialize() {
        eprintln!("failed to bootstrap memeforge: {error}");
        return ExitCode::from(1);
    }
    let mut service = build_editor_service(slot, &config);

    let command = parse_command(&args);
    match run_command(command, &mut service) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CommandError::Usage(msg)) => {
            eprintln!("{msg}");
            print_usage();
            ExitCode::from(2)
        }
        Err(CommandError::Runtime(msg)) => {
            eprintln!("{msg}");
            ExitCode::from(1)
        }
    }
}

fn build_editor_service(slot: SqliteStorageSlot, config: &AppConfig) -> EditorService {
    EditorService::new(
        GalleryStore::new(
            Box::new(slot),
            Box::new(SystemClock),
            Box::new(UuidIdGenerator),
        ),
        Box::new(ImageCrateDecoder),
        Box::new(ResvgFrameRenderer::new()),
        Box::new(FsExportSink::new(config.export_dir.clone())),
        Box::new(HeadlessShareTarget),
        Box::new(HeadlessClipboard),
    )
}

#[derive(Debug, Clone)]
struct CaptionOpts {
    top: String,
    bottom: String,
    font_size: u32,
    text_color: Color,
    outline_color: Color,
}

impl Default for CaptionOpts {
    fn default() -> Self {
        Self {
            top: String::new(),
            bottom: String::new(),
            font_size: DEFAULT_FONT_SIZE,
            text_color: DEFAULT_TEXT_COLOR,
            outline_color: DEFAULT_OUTLINE_COLOR,
        }
    }
}

#[derive(Debug, Clone)]
enum Command {
    Caption {
        image: String,
        opts: CaptionOpts,
        out: String,
    },
    Save {
        image: String,
        opts: CaptionOpts,
    },
    Share {
        image: String,
        opts: CaptionOpts,
    },
    List,
    Reuse {
        id: String,
        opts: CaptionOpts,
        out: String,
    },
    Export {
        id: String,
        out: String,
    },
    Clear,
}

#[derive(Debug, Clone)]
enum CommandError {
    Usage(String),
    Runtime(String),
}

fn parse_command(args: &[String]) -> Result<Command, CommandError> {
    if args.len() <= 1 {
        return Err(CommandError::Usage("missing command".to_string()));
    }

    match args[1].as_str() {
        "caption" => {
            let (subject, opts, out) = parse_subject_and_opts(&args[2..], "image path")?;
            Ok(Command::Caption {
                image: subject,
                opts,
                out,
            })
        }
        "save" => {
            let (subject, opts, _out) = parse_subject_and_opts(&args[2..], "image path")?;
            Ok(Command::Save {
                image: subject,
                opts,
            })
        }
        "share" => {
            let (subject, opts, _out) = parse_subject_and_opts(&args[2..], "image path")?;
            Ok(Command::Share {
                image: subject,
                opts,
            })
        }
        "list" => Ok(Command::List),
        "reuse" => {
            let (subject, opts, out) = parse_subject_and_opts(&args[2..], "gallery entry id")?;
            Ok(Command::Reuse {
                id: subject,
                opts,
                out,
            })
        }
        "export" => {
            let (subject, _opts, out) = parse_subject_and_opts(&args[2..], "gallery entry id")?;
            Ok(Command::Export { id: subject, out })
        }
        "clear" => Ok(Command::Clear),
        other => Err(CommandError::Usage(format!("unknown command: {other}"))),
    }
}

fn parse_subject_and_opts(
    args: &[String],
    subject_name: &str,
) -> Result<(String, CaptionOpts, String), CommandError> {
    let Some(subject) = args.first().filter(|arg| !arg.starts_with("--")) else {
        return Err(CommandError::Usage(format!("missing {subject_name}")));
    };

    let mut opts = CaptionOpts::default();
    let mut out = "meme.png".to_string();

    let mut rest = args[1..].iter();
    while let Some(flag) = rest.next() {
        let mut value_of = |flag: &str| {
            rest.next()
                .cloned()
                .ok_or_else(|| CommandError::Usage(format!("missing value for {flag}")))
        };
        match flag.as_str() {
            "--top" => opts.top = value_of("--top")?,
            "--bottom" => opts.bottom = value_of("--bottom")?,
            "--font-size" => {
                let raw = value_of("--font-size")?;
                opts.font_size = raw
                    .parse::<u32>()
                    .map_err(|_| CommandError::Usage(format!("invalid font size: {raw}")))?;
            }
            "--text-color" => {
                let raw = value_of("--text-color")?;
                opts.text_color = parse_color(&raw)?;
            }
            "--outline-color" => {
                let raw = value_of("--outline-color")?;
                opts.outline_color = parse_color(&raw)?;
            }
            "--out" => out = value_of("--out")?,
            other => {
                return Err(CommandError::Usage(format!("unknown flag: {other}")));
            }
        }
    }

    Ok((subject.clone(), opts, out))
}

fn parse_color(raw: &str) -> Result<Color, CommandError> {
    Color::from_hex(raw).map_err(|error| CommandError::Usage(error.to_string()))
}

fn run_command(
    command: Result<Command, CommandError>,
    service: &mut EditorService,
) -> Result<(), CommandError> {
    match command? {
        Command::Caption { image, opts, out } => {
            load_from_file(service, &image)?;
            apply_opts(service, opts)?;
            let destination = service
                .export(ExportFrameCommand { file_name: out })
                .map_err(|error| CommandError::Runtime(format!("export failed: {error}")))?;
            println!("meme exported to {destination}");
            Ok(())
        }
        Command::Save { image, opts } => {
            load_from_file(service, &image)?;
            apply_opts(service, opts)?;
            let entry = service
                .save_to_gallery(SaveToGalleryCommand)
                .map_err(|error| CommandError::Runtime(format!("save failed: {error}")))?;
            println!("{}", present_saved(&entry));
            Ok(())
        }
        Command::Share { image, opts } => {
            load_from_file(service, &image)?;
            apply_opts(service, opts)?;
            let outcome = service
                .share(ShareFrameCommand)
                .map_err(|error| CommandError::Runtime(format!("share failed: {error}")))?;
            println!("{}", present_share_outcome(outcome));
            Ok(())
        }
        Command::List => {
            let entries = service
                .list_gallery(ListGalleryCommand)
                .map_err(|error| CommandError::Runtime(format!("list failed: {error}")))?;
            if entries.is_empty() {
                println!("no memes in the gallery yet");
                return Ok(());
            }
            for entry in entries {
                println!("{}", present_entry_row(&entry));
            }
            Ok(())
        }
        Command::Reuse { id, opts, out } => {
            let surface = service
                .reuse_entry(ReuseEntryCommand { id })
                .map_err(|error| CommandError::Runtime(format!("reuse failed: {error}")))?;
            println!("{}", present_loaded(surface));
            apply_opts(service, opts)?;
            let destination = service
                .export(ExportFrameCommand { file_name: out })
                .map_err(|error| CommandError::Runtime(format!("export failed: {error}")))?;
            println!("meme exported to {destination}");
            Ok(())
        }
        Command::Export { id, out } => {
            let destination = service
                .export_entry(ExportEntryCommand { id, file_name: out })
                .map_err(|error| CommandError::Runtime(format!("export failed: {error}")))?;
            println!("meme exported to {destination}");
            Ok(())
        }
        Command::Clear => {
            service
                .clear_gallery(ClearGalleryCommand)
                .map_err(|error| CommandError::Runtime(format!("clear failed: {error}")))?;
            println!("gallery cleared");
            Ok(())
        }
    }
}

fn load_from_file(service: &mut EditorService, image: &str) -> Result<(), CommandError> {
    let bytes = std::fs::read(image)
        .map_err(|error| CommandError::Runtime(format!("cannot read {image}: {error}")))?;
    let surface = service
        .load_image(LoadImageCommand { bytes })
        .map_err(|error| CommandError::Runtime(format!("cannot load this image: {error}")))?;
    println!("{}", present_loaded(surface));
    Ok(())
}

fn apply_opts(service: &mut EditorService, opts: CaptionOpts) -> Result<(), CommandError> {
    service.set_captions(SetCaptionsCommand {
        top: opts.top,
        bottom: opts.bottom,
    });
    service
        .set_style(SetStyleCommand {
            font_size: opts.font_size,
            text_color: opts.text_color,
            outline_color: opts.outline_color,
        })
        .map_err(|error| CommandError::Usage(error.to_string()))
}

fn print_usage() {
    println!("usage:");
    println!("  memeforge caption <image> [--top TEXT] [--bottom TEXT] [--font-size N]");
    println!("                    [--text-color #rrggbb] [--outline-color #rrggbb] [--out FILE]");
    println!("  memeforge save <image> [caption flags]");
    println!("  memeforge share <image> [caption flags]");
    println!("  memeforge list");
    println!("  memeforge reuse <entry_id> [caption flags] [--out FILE]");
    println!("  memeforge export <entry_id> [--out FILE]");
    println!("  memeforge clear");
}
