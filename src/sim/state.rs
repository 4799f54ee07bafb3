//! Match state and core simulation types
//!
//! The match owns every entity. Opponents don't hold a pointer to the player;
//! the AI step borrows it read-only when it needs a seek target.

use glam::IVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::direction::Direction;
use super::rect::{Field, Rect};
use crate::config::SimConfig;
use crate::consts::*;
use crate::difficulty::Difficulty;
use crate::error::ConfigError;

/// Current phase of the match lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Title menu, difficulty selectable
    Menu,
    /// Active gameplay
    Playing,
    /// Frozen gameplay
    Paused,
    /// Lives exhausted, waiting for acknowledgement
    GameOver,
}

/// Opponent AI timers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpponentAi {
    /// Ticks since the last wander roll
    pub wander_ticks: u32,
    /// Ticks since the last seek recompute
    pub seek_ticks: u32,
}

/// What kind of actor this is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActorKind {
    Player,
    Opponent(OpponentAi),
}

/// A tank: the player or an opponent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub id: u32,
    /// Top-left of the actor box
    pub pos: IVec2,
    /// Pixels per tick
    pub vel: IVec2,
    /// Facing; also the firing direction
    pub facing: Direction,
    /// Speed scalar applied to direction vectors
    pub speed: i32,
    /// Displacement actually applied by the last movement step
    pub last_step: IVec2,
    pub kind: ActorKind,
}

impl Actor {
    /// The player at the spawn point, facing up and stationary
    pub fn player(id: u32) -> Self {
        Self {
            id,
            pos: IVec2::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y),
            vel: IVec2::ZERO,
            facing: Direction::Up,
            speed: PLAYER_SPEED,
            last_step: IVec2::ZERO,
            kind: ActorKind::Player,
        }
    }

    /// An opponent at `pos`, heading down
    pub fn opponent(id: u32, pos: IVec2) -> Self {
        let mut actor = Self {
            id,
            pos,
            vel: IVec2::ZERO,
            facing: Direction::Down,
            speed: OPPONENT_SPEED,
            last_step: IVec2::ZERO,
            kind: ActorKind::Opponent(OpponentAi::default()),
        };
        actor.set_heading(Direction::Down);
        actor
    }

    pub fn is_player(&self) -> bool {
        matches!(self.kind, ActorKind::Player)
    }

    pub fn size(&self) -> IVec2 {
        IVec2::splat(ACTOR_SIZE)
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos, self.size())
    }

    pub fn center(&self) -> IVec2 {
        self.bounds().center()
    }

    /// Face `dir` and move along it at full speed
    pub fn set_heading(&mut self, dir: Direction) {
        self.facing = dir;
        self.vel = dir.vector() * self.speed;
    }

    /// Steer from input: move along `dir`, or stop (keeping the facing) on `None`
    pub fn steer(&mut self, dir: Option<Direction>) {
        match dir {
            Some(dir) => self.set_heading(dir),
            None => self.vel = IVec2::ZERO,
        }
    }

    /// Put the player back at the spawn point
    pub fn reset_to_spawn(&mut self) {
        self.pos = IVec2::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y);
        self.last_step = IVec2::ZERO;
    }

    /// Create a projectile leaving this actor's center along its facing
    pub fn fire(&self, id: u32) -> Projectile {
        let half = IVec2::splat(PROJECTILE_SIZE / 2);
        Projectile {
            id,
            pos: self.center() - half,
            direction: self.facing,
            from_player: self.is_player(),
        }
    }
}

/// A projectile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    /// Top-left of the projectile box
    pub pos: IVec2,
    /// Travel direction, inherited from the firer
    pub direction: Direction,
    /// Fired by the player (true) or an opponent (false)
    pub from_player: bool,
}

impl Projectile {
    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos, IVec2::splat(PROJECTILE_SIZE))
    }
}

/// A transient explosion marker (visual only)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Effect {
    pub id: u32,
    pub pos: IVec2,
    pub radius: i32,
}

impl Effect {
    pub fn new(id: u32, pos: IVec2) -> Self {
        Self {
            id,
            pos,
            radius: EFFECT_START_RADIUS,
        }
    }

    /// Grow one step toward the cap
    pub fn grow(&mut self) {
        self.radius = (self.radius + EFFECT_GROWTH).min(EFFECT_MAX_RADIUS);
    }

    /// Reached the cap; eligible for removal
    pub fn is_finished(&self) -> bool {
        self.radius >= EFFECT_MAX_RADIUS
    }
}

/// Notable things that happened during the last tick
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MatchEvent {
    PhaseChanged { from: MatchPhase, to: MatchPhase },
    DifficultyChanged(Difficulty),
    OpponentSpawned { id: u32, pos: IVec2 },
    OpponentDestroyed { id: u32, projectile: u32 },
    PlayerHit { projectile: u32 },
    OpponentEscaped { id: u32 },
    QuitRequested,
}

/// Complete match state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct MatchState {
    /// Playing field
    pub field: Field,
    /// Tick cadence (ms)
    pub tick_ms: u32,
    /// Concurrent opponent cap
    pub max_opponents: usize,
    /// Run seed for reproducibility
    pub seed: u64,
    /// Single source of randomness for the whole match
    pub rng: Pcg32,
    /// Active preset
    pub difficulty: Difficulty,
    /// Current phase
    pub phase: MatchPhase,
    pub score: u32,
    pub lives: u32,
    /// Simulation ticks run while playing
    pub time_ticks: u64,
    /// Tick of the last opponent spawn
    pub last_spawn_tick: u64,
    pub player: Actor,
    /// Active opponents (insertion order)
    pub opponents: Vec<Actor>,
    /// Active projectiles (insertion order)
    pub projectiles: Vec<Projectile>,
    /// Active effect markers
    pub effects: Vec<Effect>,
    /// Events produced by the last tick
    pub events: Vec<MatchEvent>,
    /// Set when "quit" is chosen from the menu; the host decides what to do
    pub quit_requested: bool,
    /// Next entity ID
    next_id: u32,
}

impl MatchState {
    /// Validate `config` and create a match sitting in the menu
    pub fn new(config: &SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let difficulty = config.difficulty_preset()?;
        Ok(Self::from_parts(config, difficulty))
    }

    /// Default configuration with the given seed, sitting in the menu
    pub fn with_seed(seed: u64) -> Self {
        Self::from_parts(&SimConfig::with_seed(seed), Difficulty::default())
    }

    fn from_parts(config: &SimConfig, difficulty: Difficulty) -> Self {
        Self {
            field: Field::new(config.field_width, config.field_height),
            tick_ms: config.tick_ms,
            max_opponents: config.max_opponents,
            seed: config.seed,
            rng: Pcg32::seed_from_u64(config.seed),
            difficulty,
            phase: MatchPhase::Menu,
            score: 0,
            lives: STARTING_LIVES,
            time_ticks: 0,
            last_spawn_tick: 0,
            player: Actor::player(0),
            opponents: Vec::new(),
            projectiles: Vec::new(),
            effects: Vec::new(),
            events: Vec::new(),
            quit_requested: false,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Reset everything match-scoped and enter `Playing`.
    ///
    /// The difficulty selection and RNG stream carry over.
    pub fn start_match(&mut self) {
        self.score = 0;
        self.lives = STARTING_LIVES;
        self.time_ticks = 0;
        self.last_spawn_tick = 0;
        self.opponents.clear();
        self.projectiles.clear();
        self.effects.clear();
        let id = self.next_entity_id();
        self.player = Actor::player(id);
        log::info!("Match started on {}", self.difficulty.as_str());
        self.set_phase(MatchPhase::Playing);
    }

    /// Move to `phase`, recording the transition
    pub fn set_phase(&mut self, phase: MatchPhase) {
        if self.phase == phase {
            return;
        }
        let from = self.phase;
        self.phase = phase;
        log::info!("Phase {:?} -> {:?}", from, phase);
        self.events.push(MatchEvent::PhaseChanged { from, to: phase });
    }

    /// Spend one life; ends the match when none remain
    pub fn lose_life(&mut self) {
        self.lives = self.lives.saturating_sub(1);
        log::debug!("Life lost, {} remaining", self.lives);
        if self.lives == 0 {
            log::info!("Game over: score {}", self.score);
            self.set_phase(MatchPhase::GameOver);
        }
    }

    /// Drop an effect marker at `pos`
    pub fn spawn_effect(&mut self, pos: IVec2) {
        let id = self.next_entity_id();
        self.effects.push(Effect::new(id, pos));
    }

    /// Place an opponent directly (bypasses spawn pacing)
    pub fn add_opponent(&mut self, pos: IVec2) -> u32 {
        let id = self.next_entity_id();
        self.opponents.push(Actor::opponent(id, pos));
        id
    }

    /// Fire from the player along its facing
    pub fn player_fire(&mut self) -> u32 {
        let id = self.next_entity_id();
        let projectile = self.player.fire(id);
        self.projectiles.push(projectile);
        id
    }

    /// Live opponent-fired projectiles
    pub fn opponent_projectile_count(&self) -> usize {
        self.projectiles.iter().filter(|p| !p.from_player).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_match_in_menu() {
        let state = MatchState::with_seed(1);
        assert_eq!(state.phase, MatchPhase::Menu);
        assert_eq!(state.lives, STARTING_LIVES);
        assert_eq!(state.score, 0);
        assert_eq!(state.difficulty, Difficulty::Medium);
        assert_eq!(state.field, Field::new(800, 600));
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = SimConfig {
            field_width: -1,
            ..SimConfig::default()
        };
        assert!(MatchState::new(&config).is_err());
    }

    #[test]
    fn test_fire_spawns_at_center() {
        let player = Actor::player(1);
        let p = player.fire(2);
        // 375 + 20 - 3, 500 + 20 - 3
        assert_eq!(p.pos, IVec2::new(392, 517));
        assert_eq!(p.direction, Direction::Up);
        assert!(p.from_player);

        let opponent = Actor::opponent(3, IVec2::new(100, 50));
        let p = opponent.fire(4);
        assert_eq!(p.pos, IVec2::new(117, 67));
        assert_eq!(p.direction, Direction::Down);
        assert!(!p.from_player);
    }

    #[test]
    fn test_opponent_starts_heading_down() {
        let o = Actor::opponent(1, IVec2::new(10, 10));
        assert_eq!(o.vel, IVec2::new(0, 1));
        assert!(!o.is_player());
    }

    #[test]
    fn test_steer_keeps_facing_when_idle() {
        let mut player = Actor::player(1);
        player.steer(Some(Direction::DownLeft));
        assert_eq!(player.vel, IVec2::new(-3, 3));
        player.steer(None);
        assert_eq!(player.vel, IVec2::ZERO);
        assert_eq!(player.facing, Direction::DownLeft);
    }

    #[test]
    fn test_effect_grows_to_cap() {
        let mut effect = Effect::new(1, IVec2::ZERO);
        let mut steps = 0;
        while !effect.is_finished() {
            effect.grow();
            steps += 1;
            assert!(effect.radius <= EFFECT_MAX_RADIUS);
        }
        assert_eq!(effect.radius, EFFECT_MAX_RADIUS);
        assert_eq!(steps, 13);
    }

    #[test]
    fn test_lose_life_to_game_over() {
        let mut state = MatchState::with_seed(1);
        state.start_match();
        state.lose_life();
        state.lose_life();
        assert_eq!(state.phase, MatchPhase::Playing);
        state.lose_life();
        assert_eq!(state.lives, 0);
        assert_eq!(state.phase, MatchPhase::GameOver);
    }

    #[test]
    fn test_start_match_resets() {
        let mut state = MatchState::with_seed(1);
        state.start_match();
        state.score = 50;
        state.lives = 1;
        state.add_opponent(IVec2::new(0, 0));
        state.player_fire();
        state.start_match();
        assert_eq!(state.score, 0);
        assert_eq!(state.lives, STARTING_LIVES);
        assert!(state.opponents.is_empty());
        assert!(state.projectiles.is_empty());
    }
}
