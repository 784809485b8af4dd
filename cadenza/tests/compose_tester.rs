use cadenza::{Action, ActionKind, ActionParam, Composer, Preset, Schedule, ScheduleField};

#[test]
fn test_default_state_runs_every_minute() {
    let entry = Composer::new().entry();
    assert_eq!(entry.command, "* * * * * /path/to/script.sh");
    assert_eq!(entry.sentence, "Run shell script every minute");
}

#[test]
fn test_nightly_shell_backup() {
    let mut composer = Composer::new();
    composer
        .set_field(ScheduleField::Minute, "0")
        .set_field(ScheduleField::Hour, "2");

    let entry = composer.entry();
    assert_eq!(entry.command, "0 2 * * * /path/to/script.sh");
    assert_eq!(entry.sentence, "Run shell script every at 2:00 am");
}

#[test]
fn test_http_healthcheck_every_minute() {
    let mut composer = Composer::new();
    composer.set_kind(ActionKind::Http);
    composer
        .set_param(ActionParam::Url, "https://api.healthcheck.io/ping")
        .set_param(ActionParam::Method, "GET");

    let entry = composer.entry();
    assert_eq!(
        entry.command,
        "* * * * * curl -X GET https://api.healthcheck.io/ping"
    );
    assert_eq!(
        entry.sentence,
        "Send GET request to api.healthcheck.io every minute"
    );
}

#[test]
fn test_preset_then_kind_switch_drops_old_params() {
    let preset = Preset::find("CLEAR TEMP FILES").unwrap();
    let mut composer = Composer::with_preset(&preset);
    assert_eq!(
        composer.entry().command,
        "0 0 * * * find /tmp -type f -mtime +7 -delete"
    );

    composer.set_kind(ActionKind::Docker);
    assert_eq!(composer.action(), &Action::default_for(ActionKind::Docker));
    assert_eq!(
        composer.entry().command,
        "0 0 * * * docker run --rm alpine:latest echo \\\"Hello from Docker\\\""
    );
}

#[test]
fn test_expression_always_has_five_tokens() {
    let schedules = [
        Schedule::default(),
        Schedule::new("*/5", "*", "*", "*", "*"),
        Schedule::new("0", "9", "1,15", "6", "1-5"),
    ];
    for schedule in schedules {
        let expression = schedule.expression();
        let tokens: Vec<&str> = expression.split(' ').collect();
        assert_eq!(tokens.len(), 5);
        assert_eq!(tokens[0], schedule.minute);
        assert_eq!(tokens[1], schedule.hour);
        assert_eq!(tokens[2], schedule.day);
        assert_eq!(tokens[3], schedule.month);
        assert_eq!(tokens[4], schedule.weekday);
    }
}

#[test]
fn test_minute_edits_invisible_while_hour_set() {
    let mut composer = Composer::new();
    composer
        .set_field(ScheduleField::Hour, "9")
        .set_field(ScheduleField::Minute, "0");
    let before = composer.entry().sentence;

    composer.set_field(ScheduleField::Minute, "30");
    assert_eq!(composer.entry().sentence, before);

    // The command still reflects the edit
    assert!(composer.entry().command.starts_with("30 9 "));
}

#[test]
fn test_compose_is_stable_across_calls() {
    let mut composer = Composer::new();
    composer
        .set_field(ScheduleField::Weekday, "1-5")
        .set_kind(ActionKind::Webhook);
    assert_eq!(composer.entry(), composer.entry());
}

#[test]
fn test_clear_restores_initial_state() {
    let mut composer = Composer::with_preset(&Preset::find("ROTATE LOGS").unwrap());
    composer.set_kind(ActionKind::Custom);
    composer.clear();

    assert_eq!(composer.schedule(), &Schedule::default());
    assert_eq!(composer.action(), &Action::default_for(ActionKind::Shell));
    assert_eq!(composer.entry(), Composer::new().entry());
}

#[test]
fn test_install_script_embeds_both_outputs() {
    let entry = Composer::with_preset(&Preset::find("BACKUP DATABASE").unwrap()).entry();
    let script = entry.to_script();
    assert!(script.starts_with("#!/bin/bash\n"));
    assert!(script.contains(&format!("# Description: {}\n", entry.sentence)));
    assert!(script.contains(&format!("# {}\n", entry.command)));
    assert!(script.ends_with("echo \"Cron job executed at $(date)\"\n"));
}
