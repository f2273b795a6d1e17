#[cfg(feature = "tracing")]
#[inline(always)]
pub fn __trace_write(args: std::fmt::Arguments) {
    if let Ok(mut tracer) = crate::gb::tracer::TRACER.lock() {
        tracer.write(args.to_string());
    }
}

#[cfg(feature = "tracing")]
pub fn __trace_dump() {
    if let Ok(tracer) = crate::gb::tracer::TRACER.lock() {
        for line in tracer.dump().lines() {
            log::debug!(target: "gb_core::tracer", "{}", line);
        }
    }
}

#[macro_export]
macro_rules! trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        {
            $crate::gb::tracer::macros::__trace_write(format_args!($($arg)*));
        }
    };
}

/// Replays the trace history through `log::debug!`.
#[macro_export]
macro_rules! trace_dump {
    () => {
        #[cfg(feature = "tracing")]
        {
            $crate::gb::tracer::macros::__trace_dump();
        }
    };
}

#[macro_export]
macro_rules! trace_obj {
    ($obj:expr) => {
        #[cfg(feature = "tracing")]
        {
            if let Ok(mut tracer) = $crate::gb::tracer::TRACER.lock() {
                tracer.log($obj);
            }
        }
    };
}
