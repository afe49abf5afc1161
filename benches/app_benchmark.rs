use criterion::{black_box, criterion_group, criterion_main, Criterion};
use simulation::math::Vec2;
use simulation::{init, App, Autopilot, Intent, Settings, Terrain, World};

const DT: f32 = 1. / 60.;

const CANYON_SIM: &str = r#"{
    "World": { "LandscapeWidth": 1000, "Height": 500 },
    "Terrain": [
        [0, 10], [40, 60], [90, 70], [120, 30], [150, 30],
        [180, 80], [260, 90], [300, 45], [330, 45], [400, 20]
    ]
}"#;

fn default_settings() -> Settings {
    Settings::default()
}

fn canyon_settings() -> Settings {
    init::json::parse_from_string(CANYON_SIM).unwrap()
}

fn free_fall(app: &mut App) {
    app.run(&mut Intent::idle(), 100_000).unwrap();
    app.next_attempt();
}

fn autopilot(app: &mut App) {
    app.run(&mut Autopilot::default(), 100_000).unwrap();
    app.new_game();
}

fn closest_point(c: &mut Criterion) {
    let terrain = Terrain::default_landscape(1000.).unwrap();
    c.bench_function("find_closest_point_default_landscape", |b| {
        b.iter(|| terrain.find_closest_point(black_box(Vec2::new(437., 180.))))
    });
}

pub fn run_benchmark(c: &mut Criterion) {
    let mut do_bench = |fun: fn(&mut App), settings: Settings, name| {
        let mut app = App::new(World::from_settings(&settings).unwrap(), DT);
        c.bench_function(name, |b| b.iter(|| fun(black_box(&mut app))));
    };
    macro_rules! bench {
        ($func:ident, $settings:ident) => {{
            let name = concat!(stringify!($func), "_", stringify!($settings));
            do_bench($func, $settings(), name);
        }};
    }

    bench!(free_fall, default_settings);
    bench!(free_fall, canyon_settings);
    bench!(autopilot, default_settings);
    bench!(autopilot, canyon_settings);
}

criterion_group!(benches, run_benchmark, closest_point);
criterion_main!(benches);
