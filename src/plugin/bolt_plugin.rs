use bevy::prelude::*;
use crate::core::bolt_params::BoltParams;
use crate::core::seeded_or_not::SeededOrNot;
use crate::random::unit_source::GenRng;
use crate::spawning::lightning::create_lightning_bolt;

/// Spawns and draws lightning bolts sent as [`SpawnBoltEvent`]s.
pub struct BoltPlugin {
    pub seed: SeededOrNot,
}

impl Default for BoltPlugin {
    fn default() -> Self {
        BoltPlugin { seed: SeededOrNot::Unseeded }
    }
}

impl Plugin for BoltPlugin {
    fn build(&self, app: &mut App) {
        info!("[BoltPlugin] seed: {:?}", self.seed);
        app
            .insert_resource(BoltRng(GenRng::from_seed_choice(self.seed)))
            .init_resource::<ActiveBolts>()
            .add_event::<SpawnBoltEvent>()
            .add_systems(Update, (bolt_spawn_listener, expire_bolts, draw_bolts).chain());
    }
}

#[derive(Resource)]
pub struct BoltRng(pub GenRng);

#[derive(Event, Clone, Debug)]
pub struct SpawnBoltEvent {
    pub source: Vec2,
    pub dest: Vec2,
    pub params: BoltParams,
    // Seconds the bolt stays on screen.
    pub lifetime: f32,
    pub color: Color,
}

impl SpawnBoltEvent {
    pub fn new(source: Vec2, dest: Vec2) -> Self {
        SpawnBoltEvent {
            source,
            dest,
            params: BoltParams::default(),
            lifetime: 0.15,
            color: Color::rgb(0.75, 0.9, 1.0),
        }
    }
}

#[derive(Clone, Debug)]
pub struct ActiveBolt {
    pub points: Vec<Vec2>,
    pub remaining: f32,
    pub color: Color,
}

#[derive(Resource, Default)]
pub struct ActiveBolts(pub Vec<ActiveBolt>);

pub fn bolt_spawn_listener(
    mut reader: EventReader<SpawnBoltEvent>,
    mut rng: ResMut<BoltRng>,
    mut bolts: ResMut<ActiveBolts>,
) {
    for event in reader.read() {
        let path = create_lightning_bolt(event.source.into(), event.dest.into(), &event.params, &mut rng.0);
        debug!("[BoltPlugin] spawned bolt with {} points", path.len());
        bolts.0.push(ActiveBolt {
            points: path.into_iter().map(Vec2::from).collect(),
            remaining: event.lifetime,
            color: event.color,
        });
    }
}

pub fn expire_bolts(time: Res<Time>, mut bolts: ResMut<ActiveBolts>) {
    let dt = time.delta_seconds();
    bolts.0.retain_mut(|bolt| {
        bolt.remaining -= dt;
        bolt.remaining > 0.0
    });
}

pub fn draw_bolts(mut gizmos: Gizmos, bolts: Res<ActiveBolts>) {
    for bolt in &bolts.0 {
        gizmos.linestrip_2d(bolt.points.iter().copied(), bolt.color);
    }
}

#[macro_export]
macro_rules! spawn_bolt {
    ($commands:expr, $event:expr) => {
        $commands.add(move |w: &mut bevy::prelude::World| {
            w.send_event($event);
        });
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_become_active_bolts() {
        let mut app = App::new();
        app.insert_resource(BoltRng(GenRng::new(132)))
            .init_resource::<ActiveBolts>()
            .add_event::<SpawnBoltEvent>()
            .add_systems(Update, bolt_spawn_listener);

        app.world.send_event(SpawnBoltEvent::new(Vec2::ZERO, Vec2::new(160.0, 0.0)));
        app.update();

        let bolts = app.world.resource::<ActiveBolts>();
        assert_eq!(bolts.0.len(), 1);
        assert_eq!(bolts.0[0].points.len(), 13);
        assert_eq!(bolts.0[0].points[0], Vec2::ZERO);
        assert_eq!(bolts.0[0].points[12], Vec2::new(160.0, 0.0));
    }
}
