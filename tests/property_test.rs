// ==========================================
// 属性测试
// ==========================================
// 不变量:
// - 背包最优性: 与暴力枚举（n <= 12）的最优值一致，且选中成本不超容量
// - 可加性: 工单总价 == Σ 房间总价 == Σ 表面总价（任意房间划分）
// - 汇总非负: 未涂面积与剩余费用 >= 0（选中集 ⊆ 原始集）
// - 幂等: breakdown()/summary() 重复调用结果一致
// ==========================================


use paint_estimator::domain::job::{Job, PaintableSurface, Room};
use paint_estimator::domain::types::{Condition, SubstrateKind};
use paint_estimator::engine::{optimal_knapsack, OptimiseStrategy};
use proptest::prelude::*;
use test_helpers::SurfaceBuilder;

/// 暴力枚举最优价值
fn brute_force(capacity: usize, values: &[f64], costs: &[usize]) -> f64 {
    let n = values.len();
    let mut best = 0.0_f64;
    for mask in 0u32..(1 << n) {
        let (value, cost) = (0..n)
            .filter(|i| mask & (1 << i) != 0)
            .fold((0.0, 0usize), |(v, c), i| (v + values[i], c + costs[i]));
        if cost <= capacity && value > best {
            best = value;
        }
    }
    best
}

fn condition_strategy() -> impl Strategy<Value = Condition> {
    prop_oneof![
        Just(Condition::Good),
        Just(Condition::Okay),
        Just(Condition::Poor)
    ]
}

fn substrate_strategy() -> impl Strategy<Value = SubstrateKind> {
    prop_oneof![
        Just(SubstrateKind::PrePaintedEmulsion),
        Just(SubstrateKind::PrePaintedWood),
        Just(SubstrateKind::Plaster),
        Just(SubstrateKind::NewWood),
        Just(SubstrateKind::Mdf),
        Just(SubstrateKind::Metal)
    ]
}

fn surface_strategy() -> impl Strategy<Value = PaintableSurface> {
    (
        0.5f64..40.0,
        substrate_strategy(),
        condition_strategy(),
        1.0f64..60.0,
    )
        .prop_map(|(area, substrate, condition, price)| {
            SurfaceBuilder::new(area)
                .substrate(substrate)
                .condition(condition)
                .paint(price, 5.0, 12.0)
                .build()
        })
}

fn job_strategy() -> impl Strategy<Value = Job> {
    prop::collection::vec(prop::collection::vec(surface_strategy(), 0..4), 0..5).prop_map(
        |rooms| {
            let rooms = rooms
                .into_iter()
                .enumerate()
                .map(|(i, surfaces)| Room::new(surfaces, Some(format!("Room {}", i + 1))))
                .collect();
            Job::new(rooms, None)
        },
    )
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-6 * (1.0 + a.abs().max(b.abs()))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_knapsack_matches_brute_force(
        items in prop::collection::vec((0u32..50, 0usize..30), 0..=12),
        capacity in 0usize..120,
    ) {
        // 整数价值保证浮点求和精确
        let values: Vec<f64> = items.iter().map(|(v, _)| *v as f64).collect();
        let costs: Vec<usize> = items.iter().map(|(_, c)| *c).collect();

        let solution = optimal_knapsack(capacity, &values, &costs).unwrap();
        prop_assert_eq!(solution.optimal_value, brute_force(capacity, &values, &costs));

        let picked_cost: usize = solution.selected.iter().map(|&i| costs[i]).sum();
        let picked_value: f64 = solution.selected.iter().map(|&i| values[i]).sum();
        prop_assert!(picked_cost <= capacity);
        prop_assert_eq!(picked_cost, solution.total_cost);
        prop_assert_eq!(picked_value, solution.optimal_value);

        // 下标降序且不重复
        prop_assert!(solution.selected.windows(2).all(|w| w[0] > w[1]));

        // 零成本项总被选入
        for (i, cost) in costs.iter().enumerate() {
            if *cost == 0 {
                prop_assert!(solution.selected.contains(&i));
            }
        }
    }

    #[test]
    fn prop_job_totals_are_additive(job in job_strategy()) {
        let rooms_total: f64 = job.rooms().iter().map(|r| r.total_price()).sum();
        let flat_total: f64 = job.flatten().iter().map(|s| s.total_price()).sum();
        prop_assert!(close(job.total_price(), rooms_total));
        prop_assert!(close(job.total_price(), flat_total));
        prop_assert!(close(job.total_price(), job.paint_price() + job.labour_price()));

        let by_condition: f64 = [Condition::Good, Condition::Okay, Condition::Poor]
            .iter()
            .map(|c| job.total_area_by_condition(&[*c]))
            .sum();
        prop_assert!(close(job.total_area(), by_condition));
    }

    #[test]
    fn prop_summary_is_non_negative(job in job_strategy(), fraction in 0.0f64..1.2) {
        let budget = (job.total_price() * fraction).floor() as i64;
        for strategy in OptimiseStrategy::ALL {
            let result = job.optimise(budget, strategy).unwrap();
            let summary = result.summary();

            prop_assert!(summary.unpainted_area >= 0.0);
            prop_assert!(summary.cost_for_remaining_items >= 0.0);
            prop_assert!(close(summary.total_area_in_budget + summary.unpainted_area, job.total_area()));

            let selected_cost: u64 = result
                .selected()
                .iter()
                .map(|s| s.total_price().ceil() as u64)
                .sum();
            if strategy == OptimiseStrategy::BySurface {
                prop_assert!(selected_cost <= budget as u64);
            }

            // 幂等
            prop_assert_eq!(summary, result.summary());
            prop_assert_eq!(result.breakdown(), result.breakdown());
        }
    }

    #[test]
    fn prop_room_strategies_select_whole_rooms(job in job_strategy(), fraction in 0.0f64..1.0) {
        let budget = (job.total_price() * fraction).floor() as i64;
        let result = job.optimise_by_room(budget).unwrap();
        for room in job.rooms() {
            let picked = result
                .selected()
                .iter()
                .filter(|s| s.room_name() == Some(room.name()))
                .count();
            prop_assert!(picked == 0 || picked == room.surfaces().len());
        }
    }
}
