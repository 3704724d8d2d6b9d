use serde::Serialize;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }
}

/// Same column layout as the course's `spacex_launch_dash.csv`.
#[derive(Serialize)]
struct Row {
    #[serde(rename = "Flight Number")]
    flight_number: u32,
    #[serde(rename = "Launch Site")]
    launch_site: &'static str,
    class: u8,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "Booster Version Category")]
    booster_category: &'static str,
}

const MAX_PAYLOAD: f64 = 9600.0;

fn main() -> anyhow::Result<()> {
    let mut rng = SimpleRng::new(42);

    // (site, launches, success probability)
    let sites = [
        ("CCAFS LC-40", 26, 0.27),
        ("VAFB SLC-4E", 10, 0.40),
        ("KSC LC-39A", 13, 0.77),
        ("CCAFS SLC-40", 7, 0.43),
    ];
    let boosters = ["v1.0", "v1.1", "FT", "B4", "B5"];

    let output_path = "spacex_launch_dash.csv";
    let mut writer = csv::Writer::from_path(output_path)?;

    let mut flight_number = 0;
    for (site, launches, p_success) in sites {
        for _ in 0..launches {
            flight_number += 1;
            // Pin the first and last flights to the slider bounds.
            let payload_mass_kg = match flight_number {
                1 => 0.0,
                56 => MAX_PAYLOAD,
                _ => (rng.next_f64() * MAX_PAYLOAD).round(),
            };
            // Later flights use later boosters.
            let booster = boosters[((flight_number - 1) * boosters.len() as u32 / 56) as usize];

            writer.serialize(Row {
                flight_number,
                launch_site: site,
                class: (rng.next_f64() < p_success) as u8,
                payload_mass_kg,
                booster_category: booster,
            })?;
        }
    }
    writer.flush()?;

    println!("Wrote {flight_number} launches to {output_path}");
    Ok(())
}
