use chrono::{DateTime, Local};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrepTask {
    pub id: String,
    pub text: String,
    pub completed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThreadStatus {
    Active,
    Resolved,
    Dormant,
}

impl ThreadStatus {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            ThreadStatus::Active => "active",
            ThreadStatus::Resolved => "resolved",
            ThreadStatus::Dormant => "dormant",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlotThread {
    pub id: String,
    pub name: String,
    pub status: ThreadStatus,
}

/// The four coaching pillars. Each has a fixed accent colour in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pillar {
    Voice,
    Improv,
    Worldbuilding,
    Storytelling,
}

impl Pillar {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Pillar::Voice => "Voice",
            Pillar::Improv => "Improv",
            Pillar::Worldbuilding => "Worldbuilding",
            Pillar::Storytelling => "Storytelling",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skill {
    pub name: String,
    pub progress: u16,
    pub pillar: Pillar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AchievementTier {
    Bronze,
    Silver,
    Gold,
}

impl AchievementTier {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            AchievementTier::Bronze => "bronze",
            AchievementTier::Silver => "silver",
            AchievementTier::Gold => "gold",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Achievement {
    pub id: String,
    pub name: String,
    pub tier: AchievementTier,
    pub description: String,
    pub unlocked_at: DateTime<Local>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingModule {
    pub id: String,
    pub name: String,
    pub pillar: Pillar,
    pub duration: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Npc,
    Location,
    Encounter,
    Item,
    Lore,
}

impl EntityKind {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::Npc => "NPC",
            EntityKind::Location => "Location",
            EntityKind::Encounter => "Encounter",
            EntityKind::Item => "Item",
            EntityKind::Lore => "Lore",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityVerb {
    Created,
    Edited,
}

impl ActivityVerb {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            ActivityVerb::Created => "created",
            ActivityVerb::Edited => "edited",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorldActivity {
    pub id: String,
    pub kind: EntityKind,
    pub name: String,
    pub verb: ActivityVerb,
    pub timestamp: DateTime<Local>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toy {
    pub id: String,
    pub name: String,
    pub kind: EntityKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PastSession {
    pub id: String,
    pub name: String,
    pub date: DateTime<Local>,
    pub campaign: String,
    pub rating: Option<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CampaignStats {
    pub sessions: u32,
    pub npcs: u32,
    pub locations: u32,
    pub players: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Campaign {
    pub id: String,
    pub name: String,
    pub current_arc: String,
    pub stats: CampaignStats,
    pub plot_threads: Vec<PlotThread>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberTier {
    Ember,
    Forge,
    Archive,
}

impl MemberTier {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            MemberTier::Ember => "Ember",
            MemberTier::Forge => "Forge",
            MemberTier::Archive => "Archive",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
    pub tier: MemberTier,
    pub training_streak: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextSession {
    pub id: String,
    pub campaign_name: String,
    pub date: DateTime<Local>,
    pub players: Vec<String>,
    pub prep_progress: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Training {
    pub current_streak: u32,
    pub skills: Vec<Skill>,
    pub next_module: TrainingModule,
    pub recent_achievements: Vec<Achievement>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardData {
    pub user: User,
    pub next_session: Option<NextSession>,
    pub active_campaign: Option<Campaign>,
    pub training: Training,
    pub world_activity: Vec<WorldActivity>,
    pub recent_toys: Vec<Toy>,
    pub prep_tasks: Vec<PrepTask>,
    pub recent_sessions: Vec<PastSession>,
}

impl DashboardData {
    #[must_use]
    pub fn next_session_date(&self) -> Option<DateTime<Local>> {
        self.next_session.as_ref().map(|s| s.date)
    }

    /// Percentage of prep tasks marked done; zero for an empty checklist.
    #[must_use]
    pub fn prep_completion(&self) -> u16 {
        if self.prep_tasks.is_empty() {
            return 0;
        }
        let done = self.prep_tasks.iter().filter(|t| t.completed).count();
        (done * 100 / self.prep_tasks.len()) as u16
    }
}
