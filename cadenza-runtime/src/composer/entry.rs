use crate::action::Action;
use crate::schedule::Schedule;

/// Composed crontab line and its English description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CronEntry {
    /// Full crontab line: the five schedule fields followed by the command
    pub command: String,
    /// One English sentence describing what runs and when
    pub sentence: String,
}

/// Compose a schedule and an action into a crontab entry.
///
/// The command is the schedule expression joined to the action's invocation
/// fragment with a single space. The sentence embeds the schedule's time
/// phrase, lower-cased, after the action phrase. Pure and total: every input
/// combination (including all-default descriptors) yields non-empty strings,
/// and unchanged inputs yield byte-identical output.
pub fn compose(schedule: &Schedule, action: &Action) -> CronEntry {
    let command = format!("{} {}", schedule.expression(), action.fragment());
    let sentence = action.describe(&schedule.describe().to_lowercase());
    CronEntry { command, sentence }
}

impl CronEntry {
    /// Render the entry as a self-documenting shell script, ready to be
    /// saved next to the crontab it belongs in.
    pub fn to_script(&self) -> String {
        format!(
            "#!/bin/bash\n\
             # Cron job generated by cadenza\n\
             # Description: {}\n\
             # Add this to your crontab:\n\
             # {}\n\
             \n\
             echo \"Cron job executed at $(date)\"\n",
            self.sentence, self.command
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::ActionKind;

    #[test]
    fn test_compose_joins_expression_and_fragment() {
        let schedule = Schedule::new("0", "2", "*", "*", "*");
        let action = Action::default_for(ActionKind::Shell);
        let entry = compose(&schedule, &action);
        assert_eq!(entry.command, "0 2 * * * /path/to/script.sh");
    }

    #[test]
    fn test_sentence_lowercases_time_phrase() {
        let schedule = Schedule::new("0", "2", "*", "*", "*");
        let action = Action::default_for(ActionKind::Shell);
        let entry = compose(&schedule, &action);
        assert_eq!(entry.sentence, "Run shell script every at 2:00 am");
    }

    #[test]
    fn test_compose_is_idempotent() {
        let schedule = Schedule::new("*/5", "*", "*", "*", "1-5");
        let action = Action::default_for(ActionKind::Webhook);
        assert_eq!(compose(&schedule, &action), compose(&schedule, &action));
    }

    #[test]
    fn test_all_defaults_produce_non_empty_output() {
        let schedule = Schedule::default();
        for kind in ActionKind::ALL {
            let entry = compose(&schedule, &Action::default_for(kind));
            assert!(!entry.command.is_empty());
            assert!(!entry.sentence.is_empty());
            assert!(entry.command.starts_with("* * * * * "));
        }
    }

    #[test]
    fn test_script_template() {
        let entry = compose(&Schedule::default(), &Action::default_for(ActionKind::Shell));
        let script = entry.to_script();
        let lines: Vec<&str> = script.lines().collect();
        assert_eq!(lines[0], "#!/bin/bash");
        assert_eq!(lines[1], "# Cron job generated by cadenza");
        assert_eq!(lines[2], "# Description: Run shell script every minute");
        assert_eq!(lines[3], "# Add this to your crontab:");
        assert_eq!(lines[4], "# * * * * * /path/to/script.sh");
        assert_eq!(lines[5], "");
        assert_eq!(lines[6], "echo \"Cron job executed at $(date)\"");
    }
}
