//! Sanity checks over the recorded damage data.
//!
//! The numbers are hand-transcribed from in-game testing, so these checks
//! look for transposed digits and copy slips rather than exact values.

use route_content::HitType;
use route_content::sl1;

/// Pairs of (weaker, stronger) swings of the same weapon. A stronger swing
/// must never record less damage than a weaker one against the same enemy.
const ORDERED_PAIRS: [(HitType, HitType); 6] = [
    (HitType::Weak1H, HitType::Weak2H),
    (HitType::Heavy1H, HitType::Heavy2H),
    (HitType::Weak1H, HitType::Heavy1H),
    (HitType::Weak2H, HitType::Heavy2H),
    (HitType::Heavy1H, HitType::Riposte1H),
    (HitType::Heavy2H, HitType::Riposte2H),
];

#[test]
fn stronger_hits_never_deal_less_damage() {
    let mut failures = Vec::new();
    for (weapon, enemies) in sl1::hit_lookup() {
        for (enemy, hits) in enemies {
            for (weaker, stronger) in ORDERED_PAIRS {
                let (Some(weak), Some(strong)) = (hits.get(&weaker), hits.get(&stronger)) else {
                    continue;
                };
                for (label, weak_value, strong_value) in [
                    ("damage", weak.damage, strong.damage),
                    ("RTSR damage", weak.with_rtsr, strong.with_rtsr),
                ] {
                    // Zero means unmeasured, not harmless.
                    if weak_value == 0 || strong_value == 0 {
                        continue;
                    }
                    if weak_value > strong_value {
                        failures.push(format!(
                            "{weapon} vs {enemy:?}: {} {label} {weak_value} exceeds {} {label} {strong_value}",
                            weaker.display_name(),
                            stronger.display_name(),
                        ));
                    }
                }
            }
        }
    }
    assert!(failures.is_empty(), "{}", failures.join("\n"));
}

#[test]
fn every_recorded_weapon_has_at_least_one_measured_hit() {
    for (weapon, enemies) in sl1::hit_lookup() {
        let measured = enemies
            .values()
            .flat_map(|hits| hits.values())
            .any(|hit| hit.damage > 0 || hit.with_rtsr > 0);
        assert!(measured, "{weapon} has no measured hits at all");
    }
}
