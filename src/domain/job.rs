// ==========================================
// 涂装报价系统 - 工单聚合模型
// ==========================================
// 层级: Job → Room → PaintableSurface
// 红线: 汇总值始终由子节点实时计算，不缓存
//       Job.total == Σ Room.total == Σ Σ PaintableSurface.total
// ==========================================

use crate::domain::error::{ensure_positive, DomainResult};
use crate::domain::optimisation::OptimisedResult;
use crate::domain::paint::Paint;
use crate::domain::surface::Surface;
use crate::domain::types::Condition;
use crate::engine::budget_optimizer::BudgetOptimizer;
use crate::engine::price_evaluator::{
    PriceEvaluation, PriceEvaluator, DEFAULT_LABOUR_RATE_PER_SQM_PER_COAT,
};
use crate::engine::strategy::OptimiseStrategy;
use serde::{Deserialize, Serialize};

/// 未命名房间的默认名称
pub const DEFAULT_ROOM_NAME: &str = "Room";

/// 未命名工单的默认名称
pub const DEFAULT_JOB_NAME: &str = "Job";

/// 展示用四舍五入（保留 decimals 位小数）
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

// ==========================================
// BreakdownRecord - 单个表面报价明细
// ==========================================
// 数值字段已保留两位小数，仅用于展示
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownRecord {
    pub room_name: Option<String>,
    pub surface_name: String,
    pub total_price: f64,
    pub labour_price: f64,
    pub paint_price: f64,
    pub paint_volume_needed: f64,
    pub surface_area: f64,
    /// 需购买的整罐数（仅供参考，不参与计价）
    pub units_to_purchase: u32,
}

// ==========================================
// PaintableSurface - 计价单元（一个表面 + 一种油漆）
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaintableSurface {
    surface: Surface,
    paint: Paint,
    labour_rate_per_sqm_per_coat: f64,
}

impl PaintableSurface {
    /// 创建计价单元
    ///
    /// # 参数
    /// - `labour_rate`: 人工单价（每平方米每道涂层），None 时取默认值 4.0
    pub fn new(surface: Surface, paint: Paint, labour_rate: Option<f64>) -> DomainResult<Self> {
        let labour_rate_per_sqm_per_coat = match labour_rate {
            Some(rate) => ensure_positive("labour_rate", rate)?,
            None => DEFAULT_LABOUR_RATE_PER_SQM_PER_COAT,
        };
        Ok(Self {
            surface,
            paint,
            labour_rate_per_sqm_per_coat,
        })
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn paint(&self) -> &Paint {
        &self.paint
    }

    pub fn labour_rate(&self) -> f64 {
        self.labour_rate_per_sqm_per_coat
    }

    pub fn room_name(&self) -> Option<&str> {
        self.surface.room_name()
    }

    pub fn area(&self) -> f64 {
        self.surface.area()
    }

    pub fn condition(&self) -> Condition {
        self.surface.substrate().condition()
    }

    /// 完整计价结果
    pub fn evaluation(&self) -> PriceEvaluation {
        PriceEvaluator::new().evaluate(
            &self.surface,
            &self.paint,
            self.labour_rate_per_sqm_per_coat,
        )
    }

    pub fn paint_volume_needed(&self) -> f64 {
        self.evaluation().paint_volume_needed
    }

    pub fn paint_price(&self) -> f64 {
        self.evaluation().paint_cost
    }

    pub fn labour_price(&self) -> f64 {
        self.evaluation().labour_cost
    }

    pub fn total_price(&self) -> f64 {
        self.evaluation().total_cost
    }

    /// 报价明细（保留两位小数）
    pub fn breakdown(&self) -> BreakdownRecord {
        self.breakdown_with_decimals(2)
    }

    /// 报价明细（指定小数位数）
    pub fn breakdown_with_decimals(&self, decimals: u32) -> BreakdownRecord {
        let eval = self.evaluation();
        BreakdownRecord {
            room_name: self.room_name().map(str::to_string),
            surface_name: self.surface.name().to_string(),
            total_price: round_to(eval.total_cost, decimals),
            labour_price: round_to(eval.labour_cost, decimals),
            paint_price: round_to(eval.paint_cost, decimals),
            paint_volume_needed: round_to(eval.paint_volume_needed, decimals),
            surface_area: round_to(self.surface.area(), decimals),
            units_to_purchase: eval.paint_volume_needed.ceil() as u32,
        }
    }

    pub(crate) fn stamp_room_name(&mut self, room_name: &str) {
        self.surface.set_room_name(room_name);
    }
}

// ==========================================
// Room - 房间
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Room {
    name: String,
    surfaces: Vec<PaintableSurface>,
}

impl Room {
    /// 创建房间，并把房间名写入每个成员表面
    pub fn new(surfaces: Vec<PaintableSurface>, name: Option<String>) -> Self {
        let name = name.unwrap_or_else(|| DEFAULT_ROOM_NAME.to_string());
        let mut surfaces = surfaces;
        for surface in surfaces.iter_mut() {
            surface.stamp_room_name(&name);
        }
        Self { name, surfaces }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn surfaces(&self) -> &[PaintableSurface] {
        &self.surfaces
    }

    pub fn paint_price(&self) -> f64 {
        self.surfaces.iter().map(|s| s.paint_price()).sum()
    }

    pub fn labour_price(&self) -> f64 {
        self.surfaces.iter().map(|s| s.labour_price()).sum()
    }

    pub fn total_price(&self) -> f64 {
        self.surfaces.iter().map(|s| s.total_price()).sum()
    }

    pub fn total_area(&self) -> f64 {
        self.surfaces.iter().map(|s| s.area()).sum()
    }

    /// 仅统计基材状况属于 conditions 的表面面积
    pub fn total_area_by_condition(&self, conditions: &[Condition]) -> f64 {
        self.surfaces
            .iter()
            .filter(|s| conditions.contains(&s.condition()))
            .map(|s| s.area())
            .sum()
    }

    pub fn breakdown(&self) -> Vec<BreakdownRecord> {
        self.surfaces.iter().map(|s| s.breakdown()).collect()
    }
}

// ==========================================
// Job - 工单
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Job {
    name: String,
    rooms: Vec<Room>,
}

impl Job {
    pub fn new(rooms: Vec<Room>, name: Option<String>) -> Self {
        Self {
            name: name.unwrap_or_else(|| DEFAULT_JOB_NAME.to_string()),
            rooms,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn paint_price(&self) -> f64 {
        self.rooms.iter().map(|r| r.paint_price()).sum()
    }

    pub fn labour_price(&self) -> f64 {
        self.rooms.iter().map(|r| r.labour_price()).sum()
    }

    pub fn total_price(&self) -> f64 {
        self.rooms.iter().map(|r| r.total_price()).sum()
    }

    pub fn total_area(&self) -> f64 {
        self.rooms.iter().map(|r| r.total_area()).sum()
    }

    pub fn total_area_by_condition(&self, conditions: &[Condition]) -> f64 {
        self.rooms
            .iter()
            .map(|r| r.total_area_by_condition(conditions))
            .sum()
    }

    /// 展开所有表面，按总价升序（稳定排序，同价保持原房间/表面顺序）
    ///
    /// 优化器回溯的确定性依赖此顺序。
    pub fn flatten(&self) -> Vec<&PaintableSurface> {
        let mut items: Vec<&PaintableSurface> =
            self.rooms.iter().flat_map(|r| r.surfaces.iter()).collect();
        sort_by_price(&mut items, |s| s.total_price());
        items
    }

    /// 房间按总价升序（稳定排序）
    pub fn rooms_by_price(&self) -> Vec<&Room> {
        let mut rooms: Vec<&Room> = self.rooms.iter().collect();
        sort_by_price(&mut rooms, |r| r.total_price());
        rooms
    }

    /// 按房间分组的报价明细
    pub fn breakdown(&self) -> Vec<Vec<BreakdownRecord>> {
        self.rooms.iter().map(|r| r.breakdown()).collect()
    }

    // ==========================================
    // 预算优化入口
    // ==========================================

    /// 按策略在预算内选取工作（默认容量上限）
    pub fn optimise(
        &self,
        budget: i64,
        strategy: OptimiseStrategy,
    ) -> DomainResult<OptimisedResult<'_>> {
        BudgetOptimizer::new().optimise(self, budget, strategy)
    }

    pub fn optimise_by_surface(&self, budget: i64) -> DomainResult<OptimisedResult<'_>> {
        self.optimise(budget, OptimiseStrategy::BySurface)
    }

    pub fn optimise_by_room(&self, budget: i64) -> DomainResult<OptimisedResult<'_>> {
        self.optimise(budget, OptimiseStrategy::ByRoom)
    }

    pub fn optimise_by_room_condition(&self, budget: i64) -> DomainResult<OptimisedResult<'_>> {
        self.optimise(budget, OptimiseStrategy::ByRoomCondition)
    }
}

/// 按价格稳定升序排序（价格在构造时已保证为有限非负数）
fn sort_by_price<T>(items: &mut [T], price: impl Fn(&T) -> f64) {
    items.sort_by(|a, b| price(a).total_cmp(&price(b)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::substrate::Substrate;
    use crate::domain::types::SurfaceKind;

    fn item(kind: SurfaceKind, area: f64) -> PaintableSurface {
        let surface = Surface::with_area(kind, area, Substrate::default_emulsion()).unwrap();
        PaintableSurface::new(surface, Paint::new(30.0, 5.0, 17.0).unwrap(), None).unwrap()
    }

    fn poor_item(area: f64) -> PaintableSurface {
        let substrate = Substrate::default_emulsion().with_condition(Condition::Poor);
        let surface = Surface::with_area(SurfaceKind::Wall, area, substrate).unwrap();
        PaintableSurface::new(surface, Paint::new(30.0, 5.0, 17.0).unwrap(), None).unwrap()
    }

    #[test]
    fn test_paintable_surface_totals() {
        let ps = item(SurfaceKind::Wall, 20.0);
        let eval = ps.evaluation();
        assert_eq!(ps.labour_rate(), 4.0);
        assert_eq!(ps.total_price(), eval.paint_cost + eval.labour_cost);
        assert_eq!(ps.labour_price(), 20.0 * 4.0 * 1.0 * 2.0 * 1.0);
    }

    #[test]
    fn test_invalid_labour_rate() {
        let surface = Surface::with_area(SurfaceKind::Wall, 1.0, Substrate::default()).unwrap();
        let paint = Paint::new(30.0, 5.0, 17.0).unwrap();
        assert!(PaintableSurface::new(surface.clone(), paint.clone(), Some(0.0)).is_err());
        assert!(PaintableSurface::new(surface, paint, Some(-4.0)).is_err());
    }

    #[test]
    fn test_room_stamps_name() {
        let room = Room::new(
            vec![item(SurfaceKind::Wall, 10.0), item(SurfaceKind::Ceiling, 12.0)],
            Some("Kitchen".to_string()),
        );
        assert!(room.surfaces().iter().all(|s| s.room_name() == Some("Kitchen")));

        let unnamed = Room::new(vec![item(SurfaceKind::Wall, 1.0)], None);
        assert_eq!(unnamed.name(), DEFAULT_ROOM_NAME);
        assert_eq!(unnamed.surfaces()[0].room_name(), Some(DEFAULT_ROOM_NAME));
    }

    #[test]
    fn test_empty_room_is_allowed() {
        let room = Room::new(vec![], None);
        assert_eq!(room.total_price(), 0.0);
        assert_eq!(room.total_area(), 0.0);
        assert!(room.breakdown().is_empty());
    }

    #[test]
    fn test_job_additivity() {
        let rooms = vec![
            Room::new(
                vec![item(SurfaceKind::Wall, 8.0), item(SurfaceKind::Wall, 10.0)],
                Some("A".to_string()),
            ),
            Room::new(vec![item(SurfaceKind::Ceiling, 20.0)], Some("B".to_string())),
        ];
        let job = Job::new(rooms, None);
        assert_eq!(job.name(), DEFAULT_JOB_NAME);

        let room_sum: f64 = job.rooms().iter().map(|r| r.total_price()).sum();
        assert_eq!(job.total_price(), room_sum);
        let surface_sum: f64 = job.flatten().iter().map(|s| s.total_price()).sum();
        assert!((job.total_price() - surface_sum).abs() < 1e-9);
        assert!((job.paint_price() + job.labour_price() - job.total_price()).abs() < 1e-9);
        assert_eq!(job.total_area(), 38.0);
    }

    #[test]
    fn test_total_area_by_condition() {
        let room = Room::new(
            vec![item(SurfaceKind::Wall, 10.0), poor_item(6.0), poor_item(4.0)],
            None,
        );
        assert_eq!(room.total_area_by_condition(&[Condition::Poor]), 10.0);
        assert_eq!(room.total_area_by_condition(&[Condition::Good]), 10.0);
        assert_eq!(room.total_area_by_condition(&[]), 0.0);
        assert_eq!(
            room.total_area_by_condition(&[Condition::Good, Condition::Poor]),
            20.0
        );
    }

    #[test]
    fn test_flatten_sorted_and_stable() {
        let job = Job::new(
            vec![
                Room::new(
                    vec![item(SurfaceKind::Wall, 30.0), item(SurfaceKind::Wall, 5.0)],
                    Some("A".to_string()),
                ),
                Room::new(
                    vec![item(SurfaceKind::Wall, 5.0), item(SurfaceKind::Wall, 1.0)],
                    Some("B".to_string()),
                ),
            ],
            None,
        );
        let flat = job.flatten();
        let areas: Vec<f64> = flat.iter().map(|s| s.area()).collect();
        assert_eq!(areas, vec![1.0, 5.0, 5.0, 30.0]);
        // 同价保持原顺序：A 的 5㎡ 在 B 的 5㎡ 之前
        assert_eq!(flat[1].room_name(), Some("A"));
        assert_eq!(flat[2].room_name(), Some("B"));
    }

    #[test]
    fn test_breakdown_rounding_and_idempotence() {
        let job = Job::new(
            vec![Room::new(vec![item(SurfaceKind::Wall, 20.0)], Some("Hall".to_string()))],
            None,
        );
        let first = job.breakdown();
        let second = job.breakdown();
        assert_eq!(first, second);

        let record = &first[0][0];
        assert_eq!(record.room_name.as_deref(), Some("Hall"));
        assert_eq!(record.surface_name, "Wall");
        assert_eq!(record.surface_area, 20.0);
        // 20 / 85 × 2 = 0.4705… → 0.47
        assert_eq!(record.paint_volume_needed, 0.47);
        assert_eq!(record.units_to_purchase, 1);
        assert_eq!(record.labour_price, 160.0);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(14.117647, 2), 14.12);
        assert_eq!(round_to(2.0, 2), 2.0);
        assert_eq!(round_to(1.23456, 3), 1.235);
    }
}
