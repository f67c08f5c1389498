use crate::domain::ports::Clock;
use chrono::{DateTime, Local, NaiveTime, TimeZone};

#[derive(Debug, Clone, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// 固定時間的時鐘：--at 預覽模式與測試用
#[derive(Debug, Clone)]
pub struct FixedClock {
    at: DateTime<Local>,
}

impl FixedClock {
    pub fn new(at: DateTime<Local>) -> Self {
        Self { at }
    }

    /// 以今天的日期搭配指定時刻
    pub fn at_time(time: NaiveTime) -> Self {
        let naive = Local::now().date_naive().and_time(time);
        let at = Local
            .from_local_datetime(&naive)
            .earliest()
            .unwrap_or_else(Local::now);
        Self { at }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Local> {
        self.at
    }
}
