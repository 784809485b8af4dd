use cadenza::{ActionKind, ActionParam, Composer, ScheduleField};

fn main() {
    let mut composer = Composer::new();

    // Nightly database backup at 02:00
    composer
        .set_field(ScheduleField::Minute, "0")
        .set_field(ScheduleField::Hour, "2")
        .set_param(ActionParam::ScriptPath, "/scripts/backup-db.sh");

    let entry = composer.entry();
    println!("crontab : {}", entry.command);
    println!("meaning : {}", entry.sentence);

    // Same schedule, but hit an HTTP endpoint instead
    composer.set_kind(ActionKind::Http);
    composer.set_param(ActionParam::Url, "https://api.healthcheck.io/ping");

    let entry = composer.entry();
    println!("crontab : {}", entry.command);
    println!("meaning : {}", entry.sentence);
}
