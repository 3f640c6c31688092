/// N-body gravitational simulation — 5-body solar system.
///
/// Symplectic-Euler integration over all body pairs. Energy is printed
/// with nine decimals before and after the run.

use std::f64::consts::PI;

use tracing::debug;

pub const SOLAR_MASS: f64 = 4.0 * PI * PI;
pub const DAYS_PER_YEAR: f64 = 365.24;

/// Step count used by the suite.
pub const DEFAULT_STEPS: u64 = 1_000_000;
pub const TIME_STEP: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub vx: f64,
    pub vy: f64,
    pub vz: f64,
    pub mass: f64,
}

impl Body {
    /// Body from position, velocity in AU/day, and mass in solar masses.
    fn planet(pos: [f64; 3], vel: [f64; 3], mass: f64) -> Self {
        Self {
            x: pos[0],
            y: pos[1],
            z: pos[2],
            vx: vel[0] * DAYS_PER_YEAR,
            vy: vel[1] * DAYS_PER_YEAR,
            vz: vel[2] * DAYS_PER_YEAR,
            mass: mass * SOLAR_MASS,
        }
    }
}

/// Sun, Jupiter, Saturn, Uranus, Neptune.
pub fn solar_system() -> [Body; 5] {
    [
        Body {
            x: 0.0,
            y: 0.0,
            z: 0.0,
            vx: 0.0,
            vy: 0.0,
            vz: 0.0,
            mass: SOLAR_MASS,
        },
        Body::planet(
            [4.84143144246472090e+00, -1.16032004402742839e+00, -1.03622044471123109e-01],
            [1.66007664274403694e-03, 7.69901118419740425e-03, -6.90460016972063023e-05],
            9.54791938424326609e-04,
        ),
        Body::planet(
            [8.34336671824457987e+00, 4.12479856412430479e+00, -4.03523417114321381e-01],
            [-2.76742510726862411e-03, 4.99852801234917238e-03, 2.30417297573763929e-05],
            2.85885980666130812e-04,
        ),
        Body::planet(
            [1.28943695621391310e+01, -1.51111514016986312e+01, -2.23307578892655734e-01],
            [2.96460137564761618e-03, 2.37847173959480950e-03, -2.96589568540237556e-05],
            4.36624404335156298e-05,
        ),
        Body::planet(
            [1.53796971148509165e+01, -2.59193146099879641e+01, 1.79258772950371181e-01],
            [2.68067772490389322e-03, 1.62824170038242295e-03, -9.51592254519715870e-05],
            5.15138902046611451e-05,
        ),
    ]
}

/// Give the first body the velocity that zeroes total momentum.
pub fn offset_momentum(bodies: &mut [Body]) {
    let (mut px, mut py, mut pz) = (0.0, 0.0, 0.0);
    for b in bodies.iter() {
        px += b.vx * b.mass;
        py += b.vy * b.mass;
        pz += b.vz * b.mass;
    }
    bodies[0].vx = -px / SOLAR_MASS;
    bodies[0].vy = -py / SOLAR_MASS;
    bodies[0].vz = -pz / SOLAR_MASS;
}

/// Total kinetic plus pairwise potential energy.
pub fn energy(bodies: &[Body]) -> f64 {
    let mut e = 0.0;
    for (i, bi) in bodies.iter().enumerate() {
        e += 0.5 * bi.mass * (bi.vx * bi.vx + bi.vy * bi.vy + bi.vz * bi.vz);
        for bj in &bodies[i + 1..] {
            let dx = bi.x - bj.x;
            let dy = bi.y - bj.y;
            let dz = bi.z - bj.z;
            let dist = (dx * dx + dy * dy + dz * dz).sqrt();
            e -= bi.mass * bj.mass / dist;
        }
    }
    e
}

/// One integration step: pairwise velocity update, then positions.
pub fn advance(bodies: &mut [Body], dt: f64) {
    let n = bodies.len();
    for i in 0..n {
        let (head, tail) = bodies.split_at_mut(i + 1);
        let bi = &mut head[i];
        for bj in tail.iter_mut() {
            let dx = bi.x - bj.x;
            let dy = bi.y - bj.y;
            let dz = bi.z - bj.z;
            let d2 = dx * dx + dy * dy + dz * dz;
            let dist = d2.sqrt();
            let mag = dt / (d2 * dist);
            let mj = bj.mass;
            let mi = bi.mass;
            bi.vx -= dx * mj * mag;
            bi.vy -= dy * mj * mag;
            bi.vz -= dz * mj * mag;
            bj.vx += dx * mi * mag;
            bj.vy += dy * mi * mag;
            bj.vz += dz * mi * mag;
        }
    }
    for b in bodies.iter_mut() {
        b.x += dt * b.vx;
        b.y += dt * b.vy;
        b.z += dt * b.vz;
    }
}

/// Energy before and after a run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NBodyResult {
    pub initial_energy: f64,
    pub final_energy: f64,
}

impl NBodyResult {
    pub fn report_lines(&self) -> Vec<String> {
        vec![
            format!("{:.9}", self.initial_energy),
            format!("{:.9}", self.final_energy),
        ]
    }
}

/// Offset momentum, then advance `steps` times by `TIME_STEP`.
pub fn simulate(steps: u64) -> NBodyResult {
    let mut bodies = solar_system();
    offset_momentum(&mut bodies);
    let initial_energy = energy(&bodies);
    for _ in 0..steps {
        advance(&mut bodies, TIME_STEP);
    }
    let final_energy = energy(&bodies);
    debug!(steps, initial_energy, final_energy, "nbody complete");
    NBodyResult {
        initial_energy,
        final_energy,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_momentum_is_zero_after_offset() {
        let mut bodies = solar_system();
        offset_momentum(&mut bodies);
        let px: f64 = bodies.iter().map(|b| b.vx * b.mass).sum();
        let py: f64 = bodies.iter().map(|b| b.vy * b.mass).sum();
        let pz: f64 = bodies.iter().map(|b| b.vz * b.mass).sum();
        assert!(px.abs() < 1e-15 && py.abs() < 1e-15 && pz.abs() < 1e-15);
    }

    #[test]
    fn test_zero_steps() {
        let r = simulate(0);
        assert_eq!(r.initial_energy, r.final_energy);
        assert_eq!(format!("{:.9}", r.initial_energy), "-0.169075164");
    }

    #[test]
    fn test_thousand_steps() {
        let r = simulate(1_000);
        assert_eq!(r.report_lines(), vec!["-0.169075164", "-0.169087605"]);
    }

    #[test]
    fn test_reference_run() {
        let r = simulate(DEFAULT_STEPS);
        assert_eq!(r.report_lines(), vec!["-0.169075164", "-0.169086185"]);
    }
}
