// ==========================================
// 预算优化集成测试
// ==========================================
// 职责: 验证背包求解器与三种优化策略在工单上的行为
// 场景: 参考选取、同值取舍、零成本项、整间取舍、汇总统计
// ==========================================


use paint_estimator::domain::error::DomainError;
use paint_estimator::domain::job::Job;
use paint_estimator::engine::{
    optimal_knapsack, price_to_cost, BudgetOptimizer, KnapsackSolver, OptimiseStrategy,
};
use test_helpers::{assert_close, room, sample_job, wall, wall_with_condition};
use paint_estimator::domain::types::Condition;

// ==========================================
// 背包求解器
// ==========================================

#[test]
fn test_reference_items_mid_budget() {
    let values = [1.0, 8.0, 10.0, 20.0];
    let costs = [22, 32, 41, 173];

    // 预算 73..=94 时最优为成本 41 与 32 两项
    for capacity in [73, 80, 94] {
        let solution = optimal_knapsack(capacity, &values, &costs).unwrap();
        assert_eq!(solution.selected, vec![2, 1], "capacity {}", capacity);
        assert_eq!(solution.optimal_value, 18.0);
        assert_eq!(solution.total_cost, 73);
    }
}

#[test]
fn test_reference_items_large_budget() {
    let values = [1.0, 8.0, 10.0, 20.0];
    let costs = [22, 32, 41, 173];

    // 预算 200: 173 + 22 = 195，价值 21 优于 41 + 32 + 22 的 19
    let solution = optimal_knapsack(200, &values, &costs).unwrap();
    assert_eq!(solution.selected, vec![3, 0]);
    assert_eq!(solution.optimal_value, 21.0);
    assert!(solution.total_cost <= 200);
}

#[test]
fn test_exact_tie_keeps_earliest_item() {
    let solution = optimal_knapsack(5, &[4.0, 4.0, 4.0], &[5, 5, 5]).unwrap();
    assert_eq!(solution.selected, vec![0]);
}

#[test]
fn test_zero_cost_items_always_selected() {
    let solution = optimal_knapsack(0, &[3.0, 1.0, 2.0], &[0, 4, 0]).unwrap();
    assert_eq!(solution.selected, vec![2, 0]);
    assert_eq!(solution.optimal_value, 5.0);
    assert_eq!(solution.total_cost, 0);
}

#[test]
fn test_capacity_cap() {
    let solver = KnapsackSolver::with_max_capacity(1_000);
    assert!(solver.solve(1_000, &[1.0], &[1]).is_ok());
    assert!(matches!(
        solver.solve(1_001, &[1.0], &[1]),
        Err(DomainError::InvalidInput(_))
    ));
}

// ==========================================
// 按表面优化
// ==========================================

#[test]
fn test_price_to_cost_rounds_up() {
    let item = wall(10.0);
    // 10 × (8 + 60/85) ≈ 87.06
    assert_eq!(price_to_cost(item.total_price()), 88);
}

#[test]
fn test_equal_surfaces_tie_goes_to_first_in_price_order() {
    let job = Job::new(
        vec![room("A", vec![wall(10.0)]), room("B", vec![wall(10.0)])],
        None,
    );
    let result = job.optimise_by_surface(88).unwrap();
    assert_eq!(result.selected().len(), 1);
    assert_eq!(result.selected()[0].room_name(), Some("A"));
}

#[test]
fn test_by_surface_maximises_area() {
    let job = sample_job();
    let flat = job.flatten();
    let cheapest_two = price_to_cost(flat[0].total_price()) + price_to_cost(flat[1].total_price());

    let result = job.optimise_by_surface(cheapest_two as i64).unwrap();
    let summary = result.summary();
    assert!(summary.total_area_in_budget > 0.0);

    let selected_cost: usize = result
        .selected()
        .iter()
        .map(|s| price_to_cost(s.total_price()))
        .sum();
    assert!(selected_cost <= cheapest_two);
}

#[test]
fn test_zero_budget() {
    let job = sample_job();
    for strategy in OptimiseStrategy::ALL {
        let result = job.optimise(0, strategy).unwrap();
        assert!(result.selected().is_empty(), "{}", strategy);
        assert_eq!(result.budget(), 0);
        assert_close(result.summary().unpainted_area, job.total_area());
        assert_close(result.summary().cost_for_remaining_items, job.total_price());

        // 空选中集的合计为 +0.0
        let summary = result.summary();
        assert!(summary.total_budgeted_price.is_sign_positive(), "{}", strategy);
        assert!(summary.total_area_in_budget.is_sign_positive(), "{}", strategy);
    }
}

#[test]
fn test_negative_budget_rejected() {
    let job = sample_job();
    for strategy in OptimiseStrategy::ALL {
        assert!(matches!(
            job.optimise(-10, strategy),
            Err(DomainError::InvalidInput(_))
        ));
    }
}

#[test]
fn test_budget_above_cap_rejected() {
    let job = sample_job();
    assert!(job.optimise_by_surface(100_001).is_err());
    assert!(job.optimise_by_surface(100_000).is_ok());

    let optimizer = BudgetOptimizer::with_max_capacity(50);
    assert!(optimizer.optimise(&job, 51, OptimiseStrategy::ByRoom).is_err());
}

#[test]
fn test_generous_budget_selects_everything() {
    let job = sample_job();
    let budget = price_to_cost(job.total_price()) as i64 + 5;
    for strategy in OptimiseStrategy::ALL {
        let result = job.optimise(budget, strategy).unwrap();
        if strategy == OptimiseStrategy::ByRoomCondition {
            // Kitchen 无较差面积，价值为 0，不必入选
            continue;
        }
        assert_eq!(result.selected().len(), 5, "{}", strategy);
        assert_close(result.summary().unpainted_area, 0.0);
        assert_close(result.optimal_value(), job.total_area());
    }
}

// ==========================================
// 按房间优化
// ==========================================

#[test]
fn test_by_room_is_all_or_nothing() {
    let job = sample_job();
    let costs: Vec<usize> = job
        .rooms()
        .iter()
        .map(|r| price_to_cost(r.total_price()))
        .collect();

    for budget in [costs[0], costs[1], costs[2], costs[0] + costs[2]] {
        let result = job.optimise_by_room(budget as i64).unwrap();
        for room in job.rooms() {
            let picked = result
                .selected()
                .iter()
                .filter(|s| s.room_name() == Some(room.name()))
                .count();
            assert!(
                picked == 0 || picked == room.surfaces().len(),
                "room {} partially selected at budget {}",
                room.name(),
                budget
            );
        }
    }
}

#[test]
fn test_condition_strategy_favours_poor_rooms() {
    let job = Job::new(
        vec![
            room("Big", vec![wall(20.0)]),
            room("Damp", vec![wall_with_condition(5.0, Condition::Poor)]),
        ],
        None,
    );
    let big_cost = price_to_cost(job.rooms()[0].total_price()) as i64;

    // 预算只够其中之一：按面积选大房间，按较差面积选潮湿房间
    let by_room = job.optimise_by_room(big_cost).unwrap();
    assert!(by_room.selected().iter().all(|s| s.room_name() == Some("Big")));

    let by_condition = job.optimise_by_room_condition(big_cost).unwrap();
    assert!(by_condition
        .selected()
        .iter()
        .all(|s| s.room_name() == Some("Damp")));
    assert_close(by_condition.optimal_value(), 5.0);
}

// ==========================================
// 结果与汇总
// ==========================================

#[test]
fn test_summary_consistency() {
    let job = sample_job();
    let total = price_to_cost(job.total_price()) as i64;

    for strategy in OptimiseStrategy::ALL {
        for budget in [0, total / 4, total / 2, total] {
            let result = job.optimise(budget, strategy).unwrap();
            let summary = result.summary();

            assert_eq!(summary.budget, budget as u64);
            assert!(summary.unpainted_area >= 0.0);
            assert!(summary.cost_for_remaining_items >= 0.0);
            assert_close(
                summary.total_area_in_budget + summary.unpainted_area,
                job.total_area(),
            );
            assert_close(
                summary.total_budgeted_price + summary.cost_for_remaining_items,
                job.total_price(),
            );
            assert_eq!(
                result.selected().len() + result.remaining().len(),
                result.original().len()
            );

            // 幂等
            assert_eq!(summary, result.summary());
            assert_eq!(result.breakdown(), result.breakdown());
        }
    }
}

#[test]
fn test_selected_sorted_by_room_name() {
    let job = sample_job();
    let budget = price_to_cost(job.total_price()) as i64 + 5;
    let result = job.optimise_by_surface(budget).unwrap();
    let names: Vec<_> = result.selected().iter().map(|s| s.room_name()).collect();
    assert_eq!(names.first().copied().flatten(), Some("Hall"));
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
}

#[test]
fn test_original_keeps_price_order() {
    let job = sample_job();
    let result = job.optimise_by_room(0).unwrap();
    let flat = job.flatten();
    assert_eq!(result.original().len(), flat.len());
    for (a, b) in result.original().iter().zip(flat.iter()) {
        assert!(std::ptr::eq(*a, *b));
    }
}
