//! 屬性式記憶化

use std::cell::OnceCell;

/// 單值記憶化槽位
///
/// 放在結構體欄位中，讓 `&self` 方法的結果在實例生命週期內只計算一次。
#[derive(Debug, Clone)]
pub struct MemoCell<T> {
    cell: OnceCell<T>,
}

impl<T> MemoCell<T> {
    pub const fn new() -> Self {
        Self {
            cell: OnceCell::new(),
        }
    }

    /// 取得值，首次呼叫時執行 `init`
    pub fn get_or_init<F>(&self, init: F) -> &T
    where
        F: FnOnce() -> T,
    {
        self.cell.get_or_init(init)
    }

    /// 取得可失敗計算的值，錯誤不會被快取
    pub fn get_or_try_init<F, E>(&self, init: F) -> Result<&T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        if let Some(value) = self.cell.get() {
            return Ok(value);
        }

        let value = init()?;
        // 重入時保留先寫入的值
        Ok(self.cell.get_or_init(|| value))
    }

    pub fn get(&self) -> Option<&T> {
        self.cell.get()
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }

    /// 取出值並重設槽位
    pub fn take(&mut self) -> Option<T> {
        self.cell.take()
    }
}

impl<T> Default for MemoCell<T> {
    fn default() -> Self {
        Self::new()
    }
}
