#![allow(dead_code)]

use cosmic::app::Settings;
use cosmic::cosmic_config::CosmicConfigEntry;
use cosmic::iced::Limits;

mod application;
mod components;
mod localize;
mod message;
mod pages;

use taskpad::config;
use taskpad::core;

use application::{Flags, Taskpad};
use config::{CONFIG_VERSION, TaskpadConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cosmic_cfg = cosmic::cosmic_config::Config::new("dev.taskpad.app", CONFIG_VERSION)
        .expect("Failed to create cosmic config");
    let config = TaskpadConfig::get_entry(&cosmic_cfg).unwrap_or_else(|(_, cfg)| cfg);

    // Set up logging to the systemd user journal (`journalctl --user -t taskpad -f`).
    // Wrapper filters: taskpad crate at info/debug (per config), everything else at warn.
    {
        struct FilteredJournal {
            inner: systemd_journal_logger::JournalLog,
        }

        impl log::Log for FilteredJournal {
            fn enabled(&self, metadata: &log::Metadata) -> bool {
                let target = metadata.target();
                if target.starts_with("taskpad") || target.starts_with("application") || target.starts_with("pages") || target.starts_with("components") {
                    let max = if taskpad::debug_logging() { log::LevelFilter::Debug } else { log::LevelFilter::Info };
                    metadata.level() <= max
                } else {
                    metadata.level() <= log::LevelFilter::Warn
                }
            }
            fn log(&self, record: &log::Record) {
                if self.enabled(record.metadata()) {
                    self.inner.log(record);
                }
            }
            fn flush(&self) {
                self.inner.flush();
            }
        }

        let journal = systemd_journal_logger::JournalLog::new()
            .unwrap()
            .with_syslog_identifier("taskpad".to_string());

        taskpad::set_debug_logging(config.debug_logging);

        log::set_boxed_logger(Box::new(FilteredJournal { inner: journal })).unwrap();
        // Global max must be Debug so taskpad debug logs can pass through when toggled
        log::set_max_level(log::LevelFilter::Debug);
    }

    localize::localize();

    // Parse CLI flags. `--search <query>` pre-populates the committed
    // search query and the search box before first render.
    let initial_search = {
        let args: Vec<String> = std::env::args().collect();
        args.iter()
            .position(|a| a == "--search")
            .and_then(|i| args.get(i + 1))
            .cloned()
    };

    let mut settings = Settings::default();
    settings = settings.size_limits(Limits::NONE.min_width(400.0).min_height(300.0));

    let flags = Flags { config, initial_search };
    cosmic::app::run::<Taskpad>(settings, flags)?;

    Ok(())
}
