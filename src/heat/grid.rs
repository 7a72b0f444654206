use crate::model::OffsetTable;

pub const DAYS_IN_WEEK: usize = 7;

/// Per-weekday counts of one week. Index 0 is the newest day of the week.
pub type WeekColumn = Vec<u32>;

/// Week columns indexed by weeks before the current one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    weeks: Vec<Option<WeekColumn>>,
}

impl Grid {
    /// Reshape day offsets into week columns.
    ///
    /// Day `d` lands in slot `d + alignment - 1`, which puts today at
    /// weekday `alignment - 1` of week 0 and the weekday slots of every
    /// week on the same calendar days. Slots before today are days of the
    /// current week that have not happened yet and stay at zero. Only
    /// weeks that reach their last weekday are kept.
    pub fn build(table: &OffsetTable, alignment: u32) -> Self {
        let shift = alignment.saturating_sub(1) as usize;
        let slots = (table.horizon() + shift + 1).div_ceil(DAYS_IN_WEEK) * DAYS_IN_WEEK;
        Self::from_slots(slots, |slot| slot.checked_sub(shift).map_or(0, |day| table.get(day)))
    }

    fn from_slots(slots: usize, count_at: impl Fn(usize) -> u32) -> Self {
        let mut weeks: Vec<Option<WeekColumn>> = vec![None; slots.div_ceil(DAYS_IN_WEEK)];
        let mut column = WeekColumn::with_capacity(DAYS_IN_WEEK);

        for slot in 0..slots {
            let week = slot / DAYS_IN_WEEK;
            let weekday = slot % DAYS_IN_WEEK;

            if weekday == 0 {
                column = WeekColumn::with_capacity(DAYS_IN_WEEK);
            }

            column.push(count_at(slot));

            if weekday == DAYS_IN_WEEK - 1 {
                weeks[week] = Some(std::mem::take(&mut column));
            }
        }

        Self { weeks }
    }

    pub fn week(&self, index: usize) -> Option<&WeekColumn> {
        self.weeks.get(index).and_then(Option::as_ref)
    }

    /// Count at a cell, `None` when the week or weekday was never filled.
    pub fn cell(&self, week: usize, weekday: usize) -> Option<u32> {
        self.week(week).and_then(|column| column.get(weekday).copied())
    }

    pub fn week_count(&self) -> usize {
        self.weeks.len()
    }

    pub fn columns(&self) -> impl Iterator<Item = (usize, &WeekColumn)> {
        self.weeks
            .iter()
            .enumerate()
            .filter_map(|(week, column)| column.as_ref().map(|c| (week, c)))
    }
}
