use std::fmt;

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::{FormatTime, SystemTime};
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

/// 이벤트에서 꺼낸 필드. 로거 포트가 아닌 이벤트는 `routekit.verbosity`가 없다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFields {
    pub message: String,
    pub system: Option<String>,
    pub severity: Option<String>,
    pub verbosity: Option<String>,
    pub file: Option<String>,
    pub line: Option<u64>,
    /// 그 밖의 필드(`name=value`).
    pub extras: Vec<String>,
}

impl EventFields {
    fn set(&mut self, name: &str, value: String) {
        match name {
            "message" => self.message = value,
            "routekit.system" => self.system = Some(value),
            "routekit.severity" => self.severity = Some(value),
            "routekit.verbosity" => self.verbosity = Some(value),
            "routekit.file" => self.file = Some(value),
            other => self.extras.push(format!("{other}={value}")),
        }
    }

    fn text(&self) -> String {
        if self.extras.is_empty() {
            return self.message.clone();
        }
        format!("{} {}", self.message, self.extras.join(" "))
    }
}

impl Visit for EventFields {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.set(field.name(), value.to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        if field.name() == "routekit.line" {
            self.line = Some(value);
        } else {
            self.set(field.name(), value.to_string());
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.set(field.name(), format!("{value:?}"));
    }
}

/// 상세도별 템플릿(Minimal/Normal/Verbose)으로 한 줄을 쓰는 포매터.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleFormatter;

impl<S, N> FormatEvent<S, N> for ConsoleFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let mut fields = EventFields::default();
        event.record(&mut fields);

        let mut stamp = String::new();
        SystemTime.format_time(&mut Writer::new(&mut stamp))?;

        let line = render_line(
            &fields,
            *event.metadata().level(),
            &stamp,
            writer.has_ansi_escapes(),
        );
        writeln!(writer, "{line}")
    }
}

/// 필드와 타임스탬프(RFC 3339)로 출력 줄을 만든다.
pub(crate) fn render_line(fields: &EventFields, level: Level, stamp: &str, ansi: bool) -> String {
    let (date, time) = stamp.split_once('T').unwrap_or(("", stamp));
    let time = time.get(..8).unwrap_or(time);
    let severity = fields
        .severity
        .clone()
        .unwrap_or_else(|| severity_for(level).to_string());
    let color = color_for(level);
    let message = fields.text();

    match fields.verbosity.as_deref() {
        Some("Minimal") => paint(&message, color, ansi),
        Some("Verbose") => {
            let system = fields.system.as_deref().unwrap_or("main");
            let file = fields.file.as_deref().unwrap_or("?");
            let line = fields.line.unwrap_or(0);
            format!(
                "[{date} {time}] {} [{file}:{line}] {}",
                paint(&format!("[{system}:{severity}]"), color, ansi),
                paint(&message, color, ansi)
            )
        }
        _ => format!(
            "[{time}] {}",
            paint(&format!("[{severity}] {message}"), color, ansi)
        ),
    }
}

fn paint(text: &str, ansi_code: &str, ansi: bool) -> String {
    if ansi {
        format!("\x1b[{ansi_code}m{text}\x1b[0m")
    } else {
        text.to_string()
    }
}

fn color_for(level: Level) -> &'static str {
    if level == Level::WARN {
        "33"
    } else if level == Level::ERROR || level == Level::TRACE {
        "31"
    } else {
        "32"
    }
}

fn severity_for(level: Level) -> &'static str {
    if level == Level::TRACE {
        "Trace"
    } else if level == Level::DEBUG {
        "Debug"
    } else if level == Level::INFO {
        "Information"
    } else if level == Level::WARN {
        "Warning"
    } else {
        "Error"
    }
}
