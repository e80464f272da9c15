use rayon::prelude::*;

use crate::foundation::core::{Color, Dimensions};
use crate::foundation::error::{GraphError, GraphResult};
use crate::render::buffer::PixelBuffer;

/// A pure per-pixel function.
///
/// Implementations capture their broadcast parameters (dimensions, scale, colors, ...) at
/// construction. `shade` must depend only on those parameters, the pixel coordinate and the
/// read-only prior buffer, which is what lets [`KernelRunner`] evaluate pixels in any order
/// and on any thread.
pub trait PixelKernel: Sync {
    /// Short name used in logs and errors.
    fn name(&self) -> &'static str;

    /// Buffer size the kernel was built for.
    fn dimensions(&self) -> Dimensions;

    /// Output color of pixel `(x, y)`.
    fn shade(&self, prior: &PixelBuffer, x: u32, y: u32) -> Color;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Parallelism controls for kernel dispatch.
pub struct Threading {
    /// Evaluate rows on a rayon thread pool when `true`; plain loop otherwise.
    pub parallel: bool,
    /// Optional explicit worker thread count (parallel mode only).
    pub threads: Option<usize>,
}

impl Default for Threading {
    fn default() -> Self {
        Self {
            parallel: true,
            threads: None,
        }
    }
}

/// Runs a [`PixelKernel`] over every pixel of a buffer, returning a new buffer.
#[derive(Debug)]
pub struct KernelRunner {
    pool: Option<rayon::ThreadPool>,
}

impl KernelRunner {
    pub fn new(threading: &Threading) -> GraphResult<Self> {
        if !threading.parallel {
            return Ok(Self::sequential());
        }
        Ok(Self {
            pool: Some(build_thread_pool(threading.threads)?),
        })
    }

    /// Runner that evaluates pixels in order on the calling thread.
    pub fn sequential() -> Self {
        Self { pool: None }
    }

    pub fn is_parallel(&self) -> bool {
        self.pool.is_some()
    }

    /// Evaluate `kernel` for every pixel of `prior`.
    ///
    /// The whole output is materialized before returning; `prior` is never modified.
    pub fn run<K: PixelKernel + ?Sized>(
        &self,
        prior: &PixelBuffer,
        kernel: &K,
    ) -> GraphResult<PixelBuffer> {
        let dims = kernel.dimensions();
        if dims.width == 0 || dims.height == 0 {
            return Err(GraphError::dimension(format!(
                "kernel '{}' built for an empty {}x{} buffer",
                kernel.name(),
                dims.width,
                dims.height
            )));
        }
        if prior.dimensions() != dims {
            return Err(GraphError::dimension(format!(
                "kernel '{}' built for {}x{} but got a {}x{} buffer",
                kernel.name(),
                dims.width,
                dims.height,
                prior.dimensions().width,
                prior.dimensions().height
            )));
        }

        tracing::trace!(
            kernel = kernel.name(),
            width = dims.width,
            height = dims.height,
            parallel = self.is_parallel(),
            "dispatch"
        );

        let width = dims.width as usize;
        let mut out = vec![Color::BLACK; dims.pixel_count()];
        let shade_row = |(y, row): (usize, &mut [Color])| {
            for (x, px) in row.iter_mut().enumerate() {
                *px = kernel.shade(prior, x as u32, y as u32);
            }
        };

        match &self.pool {
            Some(pool) => pool.install(|| {
                out.par_chunks_mut(width).enumerate().for_each(shade_row);
            }),
            None => out.chunks_mut(width).enumerate().for_each(shade_row),
        }

        PixelBuffer::from_vec(dims, out)
    }
}

fn build_thread_pool(threads: Option<usize>) -> GraphResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(GraphError::validation(
            "kernel threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| GraphError::Other(anyhow::anyhow!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/dispatch.rs"]
mod tests;
