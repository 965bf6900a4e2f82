#![allow(dead_code)]

use std::collections::VecDeque;
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::Result;
use routekit::application::config::Config;
use routekit::application::context::AppContext;
use routekit::application::ports::{
    ConfigRepository, LineReader, Logger, MessageApi, ProcessControl, Repository, Screen,
};
use routekit::application::routing::ServiceProvider;
use routekit::application::usecases::positions::PositionService;
use routekit::application::usecases::settings::SettingsService;
use routekit::domain::logging::{LogEntry, Severity};
use routekit::domain::record::PositionRecord;
use routekit::infrastructure::adapters::StaticMessageApi;
use routekit::infrastructure::storage::InMemoryRepository;

#[derive(Default)]
pub struct RecordingLogger {
    entries: Mutex<Vec<LogEntry>>,
}

impl RecordingLogger {
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().map(|e| e.clone()).unwrap_or_default()
    }

    pub fn messages(&self, severity: Severity) -> Vec<String> {
        self.entries()
            .into_iter()
            .filter(|entry| entry.severity == severity)
            .map(|entry| entry.message)
            .collect()
    }
}

impl Logger for RecordingLogger {
    fn log(&self, entry: LogEntry) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(entry);
        }
    }
}

#[derive(Default)]
pub struct RecordingProcess {
    exits: Mutex<Vec<i32>>,
}

impl RecordingProcess {
    pub fn exits(&self) -> Vec<i32> {
        self.exits.lock().map(|e| e.clone()).unwrap_or_default()
    }
}

impl ProcessControl for RecordingProcess {
    fn exit(&self, code: i32) {
        if let Ok(mut exits) = self.exits.lock() {
            exits.push(code);
        }
    }
}

#[derive(Default)]
pub struct CountingScreen(pub AtomicUsize);

impl Screen for CountingScreen {
    fn clear(&self) -> Result<()> {
        self.0.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// 미리 정한 줄을 차례로 돌려주고, 다 쓰면 EOF.
pub struct ScriptedLineReader {
    lines: VecDeque<String>,
    reads: Arc<AtomicUsize>,
}

impl ScriptedLineReader {
    pub fn new(lines: &[&str]) -> (Self, Arc<AtomicUsize>) {
        let reads = Arc::new(AtomicUsize::new(0));
        let reader = Self {
            lines: lines.iter().map(|l| l.to_string()).collect(),
            reads: Arc::clone(&reads),
        };
        (reader, reads)
    }
}

impl LineReader for ScriptedLineReader {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        self.reads.fetch_add(1, Ordering::SeqCst);
        Ok(self.lines.pop_front())
    }
}

pub struct FixedConfigRepository;

impl ConfigRepository for FixedConfigRepository {
    fn load(&self) -> Result<Config> {
        Ok(Config::default())
    }

    fn inspect_pretty_json(&self) -> Result<String> {
        Ok("{}".to_string())
    }
}

/// 메모리 저장소와 기록용 어댑터로 채운 서비스 묶음.
pub struct Harness {
    pub context: AppContext,
    pub logger: Arc<RecordingLogger>,
    pub process: Arc<RecordingProcess>,
    pub screen: Arc<CountingScreen>,
    pub repository: Arc<InMemoryRepository<PositionRecord>>,
}

impl Harness {
    pub fn new() -> Self {
        Self {
            context: AppContext::default(),
            logger: Arc::new(RecordingLogger::default()),
            process: Arc::new(RecordingProcess::default()),
            screen: Arc::new(CountingScreen::default()),
            repository: Arc::new(InMemoryRepository::new()),
        }
    }

    pub fn logger(&self) -> Arc<dyn Logger> {
        self.logger.clone()
    }

    pub fn services(&self) -> ServiceProvider {
        let repository: Arc<dyn Repository<PositionRecord>> = self.repository.clone();
        ServiceProvider::new()
            .with::<Arc<dyn Logger>>(self.logger())
            .with::<Arc<dyn MessageApi>>(Arc::new(StaticMessageApi::default()))
            .with::<Arc<dyn ProcessControl>>(self.process.clone())
            .with::<Arc<dyn Screen>>(self.screen.clone())
            .with(self.context.cancellation.clone())
            .with(PositionService::new(repository))
            .with(SettingsService::new(
                Arc::new(FixedConfigRepository),
                self.context.verbosity.clone(),
            ))
    }
}

pub fn tokens(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|s| s.to_string()).collect()
}
