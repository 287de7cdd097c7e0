//! End-to-end tests over the whole pipeline: realistic scan text in,
//! inventory, export record and collection plan out.

mod pipeline;
