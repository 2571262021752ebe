mod concurrency;
mod legacy;
mod vectors;
