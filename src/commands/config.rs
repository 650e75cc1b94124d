use std::path::PathBuf;

use serde::Serialize;

use crate::cli::{ConfigCommand, ConfigSetArgs};
use crate::config;
use crate::context::AppContext;
use crate::error::{AppError, AppResult};

#[derive(Debug, Serialize)]
struct ConfigView {
    settings_file: PathBuf,
    data_dir: PathBuf,
    storage_key: String,
    timestamp_format: String,
}

pub fn run(ctx: &mut AppContext, command: ConfigCommand) -> AppResult<()> {
    match command {
        ConfigCommand::Show => show(ctx),
        ConfigCommand::Set(args) => set(ctx, args),
    }
}

fn show(ctx: &AppContext) -> AppResult<()> {
    let view = ConfigView {
        settings_file: ctx.paths.settings_file(),
        data_dir: ctx.paths.data_dir().to_path_buf(),
        storage_key: ctx.settings.storage_key()?.to_string(),
        timestamp_format: ctx.settings.timestamp_format()?.to_string(),
    };

    let text = format!(
        "settings: {}\ndata: {}\nstorage_key: {}\ntimestamp_format: {}",
        view.settings_file.display(),
        view.data_dir.display(),
        view.storage_key,
        view.timestamp_format
    );
    ctx.output.emit(&text, &view)
}

fn set(ctx: &mut AppContext, args: ConfigSetArgs) -> AppResult<()> {
    if args.storage_key.is_none() && args.timestamp_format.is_none() {
        return Err(AppError::InvalidInput(
            "nothing to set. pass --storage-key or --timestamp-format".to_string(),
        ));
    }

    let mut settings = ctx.settings.clone();
    if let Some(key) = args.storage_key {
        settings.storage_key = Some(key);
    }
    if let Some(format) = args.timestamp_format {
        settings.timestamp_format = Some(format);
    }
    settings.storage_key()?;
    settings.timestamp_format()?;

    config::save_settings(&ctx.paths, &settings)?;
    ctx.settings = settings;
    show(ctx)
}
