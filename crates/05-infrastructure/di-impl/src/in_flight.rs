//! 构建中服务的追踪
//!
//! 每个线程维护一个正在构建的服务栈，按容器标识区分。
//! 守卫在离开作用域时出栈，失败或 panic 时同样会清理。

use di_common::ContainerError;
use std::cell::RefCell;
use tracing::trace;
use uuid::Uuid;

thread_local! {
    static IN_FLIGHT: RefCell<Vec<(Uuid, String)>> = const { RefCell::new(Vec::new()) };
}

/// 当前线程中指定容器正在构建的服务，按请求顺序排列
pub(crate) fn chain(container_id: Uuid) -> Vec<String> {
    IN_FLIGHT.with(|stack| {
        stack
            .borrow()
            .iter()
            .filter(|(id, _)| *id == container_id)
            .map(|(_, name)| name.clone())
            .collect()
    })
}

/// 服务是否正在构建
pub(crate) fn contains(container_id: Uuid, name: &str) -> bool {
    IN_FLIGHT.with(|stack| {
        stack
            .borrow()
            .iter()
            .any(|(id, entry)| *id == container_id && entry == name)
    })
}

/// 构建中守卫
pub(crate) struct InFlightGuard {
    container_id: Uuid,
    name: String,
}

impl InFlightGuard {
    /// 标记服务开始构建；已在构建中则返回循环依赖错误
    pub(crate) fn enter(container_id: Uuid, name: &str) -> Result<Self, ContainerError> {
        if contains(container_id, name) {
            return Err(ContainerError::circular_dependency(name, chain(container_id)));
        }

        IN_FLIGHT.with(|stack| {
            stack
                .borrow_mut()
                .push((container_id, name.to_string()));
        });
        trace!("开始构建服务: {}", name);

        Ok(Self {
            container_id,
            name: name.to_string(),
        })
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        IN_FLIGHT.with(|stack| {
            let mut stack = stack.borrow_mut();
            if let Some(position) = stack
                .iter()
                .rposition(|(id, name)| *id == self.container_id && *name == self.name)
            {
                stack.remove(position);
            }
        });
        trace!("结束构建服务: {}", self.name);
    }
}
