//! `position`: 좌표 레코드 저장소 명령.

use anyhow::{Result, bail};
use async_trait::async_trait;

use crate::application::routing::{Command, CommandSpec, ServiceProvider, subcommand};
use crate::application::usecases::positions::PositionService;
use crate::domain::record::PositionRecord;

pub struct PositionCommand {
    service: PositionService,
}

impl PositionCommand {
    fn list(&self) -> Result<()> {
        let records = self.service.all();
        if records.is_empty() {
            println!("no positions");
            return Ok(());
        }
        for record in &records {
            print_record(record);
        }
        Ok(())
    }

    fn add(&self, x: i64, y: i64) -> Result<()> {
        let Some(record) = self.service.add(x, y) else {
            bail!("failed to store position ({x}, {y})");
        };
        println!("{}", record.id);
        Ok(())
    }

    fn get(&self, id: &str) -> Result<()> {
        let records = self.service.query_by_id(id);
        if records.is_empty() {
            bail!("position '{id}' not found");
        }
        for record in &records {
            print_record(record);
        }
        Ok(())
    }

    fn move_to(&self, id: &str, x: i64, y: i64) -> Result<()> {
        if !self.service.move_to(id, x, y) {
            bail!("position '{id}' could not be moved");
        }
        Ok(())
    }

    fn remove(&self, id: &str) -> Result<()> {
        if !self.service.remove(id) {
            bail!("position '{id}' could not be removed");
        }
        Ok(())
    }
}

fn print_record(record: &PositionRecord) {
    println!("{} ({}, {})", record.id, record.x, record.y);
}

#[async_trait]
impl Command for PositionCommand {
    async fn execute(&self) -> Result<()> {
        self.list()
    }
}

pub fn spec() -> CommandSpec<PositionCommand> {
    CommandSpec::new(
        "position",
        "Manage stored positions.",
        |services: &ServiceProvider| {
            Ok(PositionCommand {
                service: services.resolve()?,
            })
        },
    )
    .subcommand(
        subcommand("add", "Store a new position.")
            .argument::<i64>("x", "X coordinate.")
            .argument::<i64>("y", "Y coordinate.")
            .handler(|cmd: &PositionCommand, args| cmd.add(args.get("x")?, args.get("y")?)),
    )
    .subcommand(
        subcommand("list", "List stored positions.")
            .handler(|cmd: &PositionCommand, _| cmd.list()),
    )
    .subcommand(
        subcommand("get", "Show a position by id.")
            .argument::<String>("id", "Position id (case-insensitive).")
            .handler(|cmd: &PositionCommand, args| cmd.get(&args.get::<String>("id")?)),
    )
    .subcommand(
        subcommand("move", "Move an existing position.")
            .argument::<String>("id", "Position id.")
            .argument::<i64>("x", "New X coordinate.")
            .argument::<i64>("y", "New Y coordinate.")
            .handler(|cmd: &PositionCommand, args| {
                cmd.move_to(&args.get::<String>("id")?, args.get("x")?, args.get("y")?)
            }),
    )
    .subcommand(
        subcommand("remove", "Remove a position.")
            .argument::<String>("id", "Position id.")
            .handler(|cmd: &PositionCommand, args| cmd.remove(&args.get::<String>("id")?)),
    )
}
