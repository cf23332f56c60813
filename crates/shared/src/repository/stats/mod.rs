mod snapshot;

pub use self::snapshot::StatsRepository;
