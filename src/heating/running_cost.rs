use tracing::debug;

use crate::error::{CostTableError, InputField};
use crate::heating::archetypes::{archetypes, Fuel, HeatingSystem, ARCHETYPE_COUNT};

/// pence → 통화 단위 환산 계수.
pub const PENCE_PER_UNIT: f64 = 100.0;

/// 운전비 계산 입력.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostInputs {
    /// 전기 단가 [p/kWh]
    pub electricity_price: f64,
    /// 가스 단가 [p/kWh]
    pub gas_price: f64,
    /// 등유 단가 [p/kWh]
    pub oil_price: f64,
    /// 연간 열 사용량 [kWh/년]
    pub yearly_usage: f64,
}

impl CostInputs {
    /// 입력을 검증한 뒤 생성한다.
    pub fn new(
        electricity_price: f64,
        gas_price: f64,
        oil_price: f64,
        yearly_usage: f64,
    ) -> Result<Self, CostTableError> {
        let inputs = Self {
            electricity_price,
            gas_price,
            oil_price,
            yearly_usage,
        }
        .without_signed_zero();
        inputs.validate()?;
        Ok(inputs)
    }

    /// 모든 값이 유한한 0 이상의 수인지 확인한다. 범위 제한은 하지 않는다.
    pub fn validate(&self) -> Result<(), CostTableError> {
        check(InputField::ElectricityPrice, self.electricity_price)?;
        check(InputField::GasPrice, self.gas_price)?;
        check(InputField::OilPrice, self.oil_price)?;
        check(InputField::YearlyUsage, self.yearly_usage)?;
        Ok(())
    }

    /// `-0.0`을 `0.0`으로 바꾼 사본. 부호 있는 0이 `-£0`으로 표시되지 않게 한다.
    pub fn without_signed_zero(self) -> Self {
        Self {
            electricity_price: self.electricity_price + 0.0,
            gas_price: self.gas_price + 0.0,
            oil_price: self.oil_price + 0.0,
            yearly_usage: self.yearly_usage + 0.0,
        }
    }

    /// 연료에 해당하는 단가 [p/kWh].
    pub fn price_for(&self, fuel: Fuel) -> f64 {
        match fuel {
            Fuel::Electricity => self.electricity_price,
            Fuel::Gas => self.gas_price,
            Fuel::Oil => self.oil_price,
        }
    }
}

fn check(field: InputField, value: f64) -> Result<(), CostTableError> {
    if !value.is_finite() {
        return Err(CostTableError::InvalidInput {
            field,
            value,
            reason: "not a finite number",
        });
    }
    if value < 0.0 {
        return Err(CostTableError::InvalidInput {
            field,
            value,
            reason: "must not be negative",
        });
    }
    Ok(())
}

/// 방식 한 줄에 대한 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostRow {
    pub system: &'static HeatingSystem,
    /// 열 1kWh당 비용 [p]
    pub cost_per_kwh: f64,
    /// 연간 비용 [통화 단위]
    pub yearly_cost: f64,
}

/// 고정 테이블에 비용 열 두 개를 붙인 결과. 한 번의 계산에서만 쓰인다.
#[derive(Debug, Clone, PartialEq)]
pub struct CostTable {
    pub inputs: CostInputs,
    pub rows: [CostRow; ARCHETYPE_COUNT],
    pub min_yearly_cost: f64,
    pub max_yearly_cost: f64,
}

impl CostTable {
    /// 연간 비용이 가장 낮은 행. 동률이면 앞선 행.
    pub fn cheapest(&self) -> &CostRow {
        self.rows
            .iter()
            .fold(&self.rows[0], |best, r| if r.yearly_cost < best.yearly_cost { r } else { best })
    }

    /// 연간 비용이 가장 높은 행. 동률이면 앞선 행.
    pub fn most_expensive(&self) -> &CostRow {
        self.rows
            .iter()
            .fold(&self.rows[0], |worst, r| if r.yearly_cost > worst.yearly_cost { r } else { worst })
    }

    /// 모든 행의 연간 비용이 같은지 여부(색상 정규화 불가 상태).
    pub fn is_degenerate(&self) -> bool {
        self.max_yearly_cost == self.min_yearly_cost
    }
}

/// 한 방식의 kWh당 비용과 연간 비용을 계산한다.
pub fn row_cost(system: &'static HeatingSystem, inputs: &CostInputs) -> CostRow {
    let cost_per_kwh = inputs.price_for(system.fuel) / system.scop;
    let yearly_cost = cost_per_kwh * inputs.yearly_usage / PENCE_PER_UNIT;
    CostRow {
        system,
        cost_per_kwh,
        yearly_cost,
    }
}

/// 입력 단가/사용량으로 10개 방식의 운전비 표를 만든다.
pub fn compute_cost_table(inputs: CostInputs) -> Result<CostTable, CostTableError> {
    inputs.validate()?;
    let inputs = inputs.without_signed_zero();
    let systems = archetypes();
    let rows: [CostRow; ARCHETYPE_COUNT] = std::array::from_fn(|i| row_cost(&systems[i], &inputs));

    let min_yearly_cost = rows
        .iter()
        .map(|r| r.yearly_cost)
        .fold(f64::INFINITY, f64::min);
    let max_yearly_cost = rows
        .iter()
        .map(|r| r.yearly_cost)
        .fold(f64::NEG_INFINITY, f64::max);
    debug!(
        min = min_yearly_cost,
        max = max_yearly_cost,
        usage = inputs.yearly_usage,
        "cost table derived"
    );

    Ok(CostTable {
        inputs,
        rows,
        min_yearly_cost,
        max_yearly_cost,
    })
}
