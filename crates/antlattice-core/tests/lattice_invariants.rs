use antlattice_core::cell::BIT_PLANE_COLOR;
use antlattice_core::{
    AntLine, AntPlane, LineSimulation, PlaneCell, PlaneSimulation, SimulationConfig,
    scatter_line_ants, scatter_plane_ants,
};
use rand::SeedableRng;
use rand::rngs::SmallRng;

const TOLERANCE: f64 = 1e-9;

fn random_plane(width: usize, height: usize, ants: u32, seed: u64) -> AntPlane {
    let mut plane = AntPlane::new(width, height).expect("plane");
    let mut rng = SmallRng::seed_from_u64(seed);
    scatter_plane_ants(&mut plane, &mut rng, ants);
    plane
}

fn random_line(width: usize, ants: u32, seed: u64) -> AntLine {
    let mut line = AntLine::new(width).expect("line");
    let mut rng = SmallRng::seed_from_u64(seed);
    scatter_line_ants(&mut line, &mut rng, ants);
    line
}

#[test]
fn plane_steps_conserve_ants_from_random_seeds() {
    for seed in [1, 2, 3] {
        let mut plane = random_plane(48, 32, 40, seed);
        let ants = plane.ant_count();
        for _ in 0..256 {
            plane.step_forward();
            assert_eq!(plane.ant_count(), ants, "seed {seed} lost or gained ants");
        }
    }
}

#[test]
fn plane_reversibility_holds_in_both_compositions() {
    let mut plane = random_plane(40, 40, 25, 0xBEEF);
    // Walk into the reachable state space before probing.
    for _ in 0..100 {
        plane.step_forward();
    }

    let reference = plane.clone();
    plane.step_forward();
    plane.step_backward();
    assert_eq!(plane, reference);

    plane.step_backward();
    plane.step_forward();
    assert_eq!(plane, reference);
}

#[test]
fn plane_run_reversed_halfway_retraces_its_entropy_trajectory() {
    let reverse_at = 120u64;
    let plane = random_plane(30, 30, 30, 0xFACADE);
    let initial = plane.clone();
    let config = SimulationConfig {
        max_steps: 2 * reverse_at,
        reverse_at: Some(reverse_at),
        rng_seed: None,
    };
    let mut sim = PlaneSimulation::new(plane, config).expect("sim");
    let trajectory = sim.run();

    assert_eq!(sim.plane(), &initial, "reversed run must restore the seed state");
    assert_eq!(trajectory.reversed_at(), Some(reverse_at));

    let records = trajectory.records();
    let r = reverse_at as usize;
    for j in 0..r - 1 {
        assert_eq!(
            records[r + j].entropy,
            records[r - 2 - j].entropy,
            "entropy at backward step {j} does not mirror the forward half",
        );
        assert_eq!(records[r + j].colors, records[r - 2 - j].colors);
    }
    assert!((records[2 * r - 1].entropy - initial.entropy()).abs() < TOLERANCE);
}

#[test]
fn plane_no_collision_invariant_survives_long_runs() {
    let mut plane = random_plane(24, 24, 60, 0x5EED);
    let ants = plane.ant_count();
    for _ in 0..512 {
        plane.step_forward();
        // A same-heading collision would merge two presence bits and show
        // up as a drop in the total ant count.
        assert_eq!(plane.ant_count(), ants);
        assert!(
            plane
                .cells()
                .iter()
                .all(|&bits| PlaneCell::from_bits(bits).is_valid())
        );
    }
}

#[test]
fn line_reversibility_holds_from_random_seeds() {
    for seed in [7, 8, 9] {
        let mut line = random_line(64, 6, seed);
        for _ in 0..50 {
            line.step_forward();
        }
        let reference = line.clone();

        line.step_forward();
        line.step_backward();
        assert_eq!(line, reference, "seed {seed} broke forward/backward");

        line.step_backward();
        line.step_forward();
        assert_eq!(line, reference, "seed {seed} broke backward/forward");
    }
}

#[test]
fn line_forward_runs_eventually_cycle_on_small_lattices() {
    let mut line = AntLine::new(3).expect("line");
    let mut rng = SmallRng::seed_from_u64(21);
    scatter_line_ants(&mut line, &mut rng, 1);
    // 3 cells of 3 layout bits bound the state space at 2^9, so a cycle
    // must appear well before the step cap.
    let config = SimulationConfig {
        max_steps: 1024,
        reverse_at: None,
        rng_seed: None,
    };
    let mut sim = LineSimulation::new(line, config).expect("sim");
    let trajectory = sim.run();

    let cycle = trajectory.cycle().expect("finite state space must cycle");
    assert!(cycle.first_seen < cycle.repeated_at);

    let records = trajectory.records();
    assert_eq!(
        records[cycle.first_seen as usize].colors,
        records[cycle.repeated_at as usize].colors,
    );
}

#[test]
fn entropy_trajectory_stays_within_bounds() {
    let plane = random_plane(20, 20, 30, 4242);
    let config = SimulationConfig {
        max_steps: 300,
        reverse_at: None,
        rng_seed: None,
    };
    let mut sim = PlaneSimulation::new(plane, config).expect("sim");
    let trajectory = sim.run();

    for record in trajectory.records() {
        assert!(
            (0.0..=1.0 + TOLERANCE).contains(&record.entropy),
            "entropy {} out of range at step {}",
            record.entropy,
            record.step,
        );
        let black: usize = record.colors.iter().map(|&c| c as usize).sum();
        if record.entropy == 0.0 {
            assert!(black == 0 || black == record.colors.len());
        }
    }
}

#[test]
fn half_black_plane_hits_maximum_entropy() {
    let width = 8;
    let height = 4;
    let mut plane = AntPlane::new(width, height).expect("plane");
    for y in 0..height {
        for x in 0..width {
            if (y * width + x) % 2 == 0 {
                plane.set_cell(x, y, PlaneCell::from_bits(BIT_PLANE_COLOR));
            }
        }
    }
    assert!((plane.entropy() - 1.0).abs() < TOLERANCE);

    let blank = AntPlane::new(width, height).expect("plane");
    assert_eq!(blank.entropy(), 0.0);
}
