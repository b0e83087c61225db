use crate::domain::{
    models::{
        Achievement, AchievementTier, ActivityVerb, Campaign, CampaignStats, DashboardData,
        EntityKind, MemberTier, NextSession, PastSession, Pillar, PlotThread, PrepTask, Skill,
        ThreadStatus, Toy, Training, TrainingModule, User, WorldActivity,
    },
    source::DashboardSource,
};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::{DateTime, Duration, Local, NaiveTime, TimeZone};
use tracing::debug;

const CAMPAIGN_NAME: &str = "The Shattered Crown";

/// In-memory stand-in for the coaching backend. Every load builds a fresh
/// snapshot relative to the current time.
#[derive(Debug, Default)]
pub struct SampleDashboardSource;

impl SampleDashboardSource {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DashboardSource for SampleDashboardSource {
    async fn load_dashboard(&self) -> Result<DashboardData> {
        let data = build_dashboard(Local::now())?;
        debug!(
            tasks = data.prep_tasks.len(),
            activity = data.world_activity.len(),
            "Built sample dashboard"
        );
        Ok(data)
    }
}

/// Next session: three days out at 19:00 local time.
fn next_session_date(now: DateTime<Local>) -> Result<DateTime<Local>> {
    let day = (now + Duration::days(3)).date_naive();
    let seven_pm = NaiveTime::from_hms_opt(19, 0, 0).ok_or_else(|| anyhow!("invalid time"))?;
    Local
        .from_local_datetime(&day.and_time(seven_pm))
        .earliest()
        .ok_or_else(|| anyhow!("19:00 does not exist on {day}"))
}

pub fn build_dashboard(now: DateTime<Local>) -> Result<DashboardData> {
    let ago = |d: Duration| now - d;

    Ok(DashboardData {
        user: User {
            name: "Archivist Marcus".to_string(),
            tier: MemberTier::Forge,
            training_streak: 7,
        },
        next_session: Some(NextSession {
            id: "session-next".to_string(),
            campaign_name: CAMPAIGN_NAME.to_string(),
            date: next_session_date(now)?,
            players: ["Elena", "Marcus", "Sofia", "James"]
                .iter()
                .map(|p| p.to_string())
                .collect(),
            prep_progress: 65,
        }),
        active_campaign: Some(Campaign {
            id: "campaign-1".to_string(),
            name: CAMPAIGN_NAME.to_string(),
            current_arc: "The Siege of Ironhaven".to_string(),
            stats: CampaignStats {
                sessions: 24,
                npcs: 47,
                locations: 18,
                players: 4,
            },
            plot_threads: vec![
                thread("plot-1", "The King's Betrayal", ThreadStatus::Active),
                thread("plot-2", "Lost Heir of Valdris", ThreadStatus::Active),
                thread("plot-3", "The Dragon Pact", ThreadStatus::Dormant),
                thread("plot-4", "Thieves Guild Alliance", ThreadStatus::Resolved),
            ],
        }),
        training: Training {
            current_streak: 7,
            skills: vec![
                skill("Voice Acting", 72, Pillar::Voice),
                skill("Improvisation", 58, Pillar::Improv),
                skill("World Building", 85, Pillar::Worldbuilding),
                skill("Storytelling", 64, Pillar::Storytelling),
            ],
            next_module: TrainingModule {
                id: "module-voice-5".to_string(),
                name: "Accent Mastery: Dwarven Dialects".to_string(),
                pillar: Pillar::Voice,
                duration: "15 min".to_string(),
            },
            recent_achievements: vec![
                Achievement {
                    id: "ach-1".to_string(),
                    name: "Voice Virtuoso".to_string(),
                    tier: AchievementTier::Gold,
                    description: "Complete all voice acting fundamentals".to_string(),
                    unlocked_at: ago(Duration::days(2)),
                },
                Achievement {
                    id: "ach-2".to_string(),
                    name: "Week Warrior".to_string(),
                    tier: AchievementTier::Silver,
                    description: "Maintain a 7-day training streak".to_string(),
                    unlocked_at: ago(Duration::days(1)),
                },
                Achievement {
                    id: "ach-3".to_string(),
                    name: "World Weaver".to_string(),
                    tier: AchievementTier::Bronze,
                    description: "Create your first interconnected world".to_string(),
                    unlocked_at: ago(Duration::days(5)),
                },
            ],
        },
        world_activity: vec![
            activity(
                "activity-1",
                EntityKind::Npc,
                "Captain Thorne Blackwood",
                ActivityVerb::Created,
                ago(Duration::hours(2)),
            ),
            activity(
                "activity-2",
                EntityKind::Location,
                "The Sunken Temple",
                ActivityVerb::Edited,
                ago(Duration::hours(5)),
            ),
            activity(
                "activity-3",
                EntityKind::Item,
                "Blade of the Fallen Star",
                ActivityVerb::Created,
                ago(Duration::hours(8)),
            ),
            activity(
                "activity-4",
                EntityKind::Lore,
                "The War of Three Kings",
                ActivityVerb::Edited,
                ago(Duration::hours(24)),
            ),
            activity(
                "activity-5",
                EntityKind::Npc,
                "Lady Meridia Sunweaver",
                ActivityVerb::Created,
                ago(Duration::hours(26)),
            ),
            activity(
                "activity-6",
                EntityKind::Location,
                "Ironhaven Market District",
                ActivityVerb::Edited,
                ago(Duration::hours(48)),
            ),
        ],
        recent_toys: vec![
            toy("toy-1", "Random NPC Generator", EntityKind::Npc),
            toy("toy-2", "Tavern Builder", EntityKind::Location),
            toy("toy-3", "Encounter Roller", EntityKind::Encounter),
            toy("toy-4", "Loot Table", EntityKind::Item),
            toy("toy-5", "Name Generator", EntityKind::Npc),
        ],
        prep_tasks: vec![
            task("prep-1", "Review last session notes", true),
            task("prep-2", "Finalize NPC motivations for Ironhaven", true),
            task("prep-3", "Prepare combat encounter for the docks", false),
            task("prep-4", "Create handout for the mysterious letter", false),
            task("prep-5", "Practice Thorne's voice", false),
        ],
        recent_sessions: vec![
            past("session-1", "The Docks at Midnight", ago(Duration::days(7)), Some(4)),
            past("session-2", "Whispers in the Market", ago(Duration::days(14)), Some(5)),
            past("session-3", "The Council Convenes", ago(Duration::days(21)), Some(4)),
            past("session-4", "Arrival at Ironhaven", ago(Duration::days(28)), Some(5)),
            past("session-5", "The Road North", ago(Duration::days(35)), Some(3)),
        ],
    })
}

fn thread(id: &str, name: &str, status: ThreadStatus) -> PlotThread {
    PlotThread {
        id: id.to_string(),
        name: name.to_string(),
        status,
    }
}

fn skill(name: &str, progress: u16, pillar: Pillar) -> Skill {
    Skill {
        name: name.to_string(),
        progress,
        pillar,
    }
}

fn activity(
    id: &str,
    kind: EntityKind,
    name: &str,
    verb: ActivityVerb,
    timestamp: DateTime<Local>,
) -> WorldActivity {
    WorldActivity {
        id: id.to_string(),
        kind,
        name: name.to_string(),
        verb,
        timestamp,
    }
}

fn toy(id: &str, name: &str, kind: EntityKind) -> Toy {
    Toy {
        id: id.to_string(),
        name: name.to_string(),
        kind,
    }
}

fn task(id: &str, text: &str, completed: bool) -> PrepTask {
    PrepTask {
        id: id.to_string(),
        text: text.to_string(),
        completed,
    }
}

fn past(id: &str, name: &str, date: DateTime<Local>, rating: Option<u8>) -> PastSession {
    PastSession {
        id: id.to_string(),
        name: name.to_string(),
        date,
        campaign: CAMPAIGN_NAME.to_string(),
        rating,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[tokio::test]
    async fn test_load_dashboard() {
        let source = SampleDashboardSource::new();
        let data = source.load_dashboard().await.unwrap();
        assert_eq!(data.prep_tasks.len(), 5);
        assert_eq!(data.prep_completion(), 40);
        assert!(data.active_campaign.is_some());
    }

    #[test]
    fn test_next_session_is_three_days_out_at_seven() {
        let now = Local.with_ymd_and_hms(2026, 3, 4, 9, 30, 0).unwrap();
        let data = build_dashboard(now).unwrap();
        let date = data.next_session_date().unwrap();
        assert_eq!(date.date_naive(), (now + Duration::days(3)).date_naive());
        assert_eq!(date.hour(), 19);
        assert_eq!(date.minute(), 0);
    }
}
