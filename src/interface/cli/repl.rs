//! 대화형 쉘(REPL) 루프.
//!
//! 블로킹 줄 입력은 전용 스레드가 맡고, 루프는 한 줄씩 요청해 oneshot으로 받는다.
//! 각 대기는 취소 신호와 경합하므로 Ctrl-C나 `exit`가 오면 다음 입력을 기다리지 않는다.

use std::io;
use std::sync::mpsc;
use std::thread;

use anyhow::{Context, Result};
use tokio::sync::oneshot;

use crate::application::context::CancellationSignal;
use crate::application::ports::{LineReader, Logger, LoggerExt};
use crate::application::routing::CommandsHost;
use crate::domain::logging::{LogEntry, LogVerbosity};

type LineReply = oneshot::Sender<io::Result<Option<String>>>;

/// 입력 스레드와의 연결. 요청 하나에 한 줄이 돌아온다.
struct LineFeed {
    requests: mpsc::Sender<LineReply>,
}

impl LineFeed {
    fn spawn(mut reader: Box<dyn LineReader>) -> Result<Self> {
        let (requests, incoming) = mpsc::channel::<LineReply>();
        thread::Builder::new()
            .name("repl-reader".to_string())
            .spawn(move || {
                while let Ok(reply) = incoming.recv() {
                    let line = reader.read_line();
                    let finished = !matches!(line, Ok(Some(_)));
                    if reply.send(line).is_err() || finished {
                        break;
                    }
                }
            })
            .context("failed to start the line reader thread")?;
        Ok(Self { requests })
    }

    /// 입력 스레드가 끝났으면 EOF로 취급한다.
    async fn next_line(&self) -> io::Result<Option<String>> {
        let (reply, line) = oneshot::channel();
        if self.requests.send(reply).is_err() {
            return Ok(None);
        }
        line.await.unwrap_or(Ok(None))
    }
}

/// 취소되거나 입력이 끝날 때까지 줄 단위로 디스패치한다.
pub async fn run_repl(
    host: &CommandsHost,
    logger: &dyn Logger,
    cancellation: &CancellationSignal,
    reader: Box<dyn LineReader>,
) -> Result<()> {
    logger.info("App Repl 1.0");
    logger.warn("Type 'exit' to exit the REPL");

    let feed = LineFeed::spawn(reader)?;

    while !cancellation.is_cancelled() {
        let next = tokio::select! {
            biased;
            _ = cancellation.cancelled() => break,
            next = feed.next_line() => next,
        };

        let line = match next {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(err) => {
                logger.error(format!("failed to read input: {err}"));
                break;
            }
        };
        logger.log(LogEntry::info(format!("> {line}")).min_verbosity(LogVerbosity::Verbose));

        if line.trim().is_empty() {
            continue;
        }

        let report = host.parse_line(&line).await;
        if let Some(help) = &report.help {
            print!("{help}");
        }

        let code = report.code;
        if code > 0 {
            logger.log(
                LogEntry::error(format!("Error! Code ='{code}'"))
                    .min_verbosity(LogVerbosity::Verbose),
            );
        } else {
            logger.log(LogEntry::info("OK!").min_verbosity(LogVerbosity::Verbose));
        }
    }

    Ok(())
}
